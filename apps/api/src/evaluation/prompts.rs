//! Prompt Catalog: the closed set of instructions an evaluation can run with.

use crate::errors::AppError;

/// Qualitative fit review with named strengths and weaknesses.
pub const RESUME_REVIEW_PROMPT: &str = "\
You are an experienced Technical Human Resource Manager, your task is to review the provided resume against the job description. \
Please share your professional evaluation on whether the candidate's profile aligns with the role. \
Candidate Name, Highlight the strengths and weaknesses of the applicant in relation to the specified job requirements in concise.";

/// ATS-style scan: percentage first, then missing keywords, then final thoughts.
pub const MATCH_PERCENTAGE_PROMPT: &str = "\
You are a skilled Job Aligner scanner with a deep understanding of data science and ATS functionality. \
Your task is to evaluate the resume against the provided job description. Give me the percentage of match if the resume matches \
the job description. First the output should come as a percentage and then keywords missing and last final thoughts in concise.";

/// The instruction an evaluation is run with.
///
/// `Custom` can only be built through [`PromptTemplate::custom`], which rejects blank text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptTemplate {
    ResumeReview,
    MatchPercentage,
    Custom(CustomPrompt),
}

/// Non-blank, caller-supplied instruction text, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomPrompt(String);

impl PromptTemplate {
    pub fn custom(text: impl Into<String>) -> Result<Self, AppError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(AppError::EmptyPrompt);
        }
        Ok(PromptTemplate::Custom(CustomPrompt(text)))
    }

    pub fn instruction(&self) -> &str {
        match self {
            PromptTemplate::ResumeReview => RESUME_REVIEW_PROMPT,
            PromptTemplate::MatchPercentage => MATCH_PERCENTAGE_PROMPT,
            PromptTemplate::Custom(CustomPrompt(text)) => text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_templates_return_their_text() {
        assert_eq!(
            PromptTemplate::ResumeReview.instruction(),
            RESUME_REVIEW_PROMPT
        );
        assert_eq!(
            PromptTemplate::MatchPercentage.instruction(),
            MATCH_PERCENTAGE_PROMPT
        );
    }

    #[test]
    fn test_match_prompt_asks_for_percentage_keywords_and_verdict() {
        assert!(MATCH_PERCENTAGE_PROMPT.contains("percentage"));
        assert!(MATCH_PERCENTAGE_PROMPT.contains("keywords missing"));
        assert!(MATCH_PERCENTAGE_PROMPT.contains("final thoughts"));
    }

    #[test]
    fn test_review_prompt_asks_for_strengths_and_weaknesses() {
        assert!(RESUME_REVIEW_PROMPT.contains("strengths and weaknesses"));
    }

    #[test]
    fn test_custom_text_is_kept_verbatim() {
        let text = "  List three interview questions.\n";
        let template = PromptTemplate::custom(text).unwrap();
        assert_eq!(template.instruction(), text);
    }

    #[test]
    fn test_empty_custom_prompt_is_rejected() {
        assert!(matches!(
            PromptTemplate::custom(""),
            Err(AppError::EmptyPrompt)
        ));
    }

    #[test]
    fn test_whitespace_custom_prompt_is_rejected() {
        assert!(matches!(
            PromptTemplate::custom(" \t\n  "),
            Err(AppError::EmptyPrompt)
        ));
    }
}
