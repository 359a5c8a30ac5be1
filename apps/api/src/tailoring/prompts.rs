// Prompt constants for resume tailoring.
// The structure is fixed; only the two verbatim text blocks vary per call.

/// System instruction for every tailoring call.
pub const TAILOR_SYSTEM: &str = "You are an expert resume tailoring assistant. \
    Your task is to tailor the provided resume to better match the job description. \
    Highlight the candidate's relevant existing skills and experiences, \
    using the vocabulary and keywords of the job description where they truthfully apply. \
    Do NOT fabricate experiences, skills, employers, dates or credentials that are not present in the original resume. \
    Maintain a professional tone throughout. \
    Format the result as plain text that applicant tracking systems (ATS) can parse: \
    conventional section headings, no tables, no columns, no images.";

pub const RESUME_START: &str = "=== RESUME START ===";
pub const RESUME_END: &str = "=== RESUME END ===";
pub const JOB_DESCRIPTION_START: &str = "=== JOB DESCRIPTION START ===";
pub const JOB_DESCRIPTION_END: &str = "=== JOB DESCRIPTION END ===";

/// Closing instruction appended after both blocks.
pub const TAILOR_CLOSING: &str = "Please tailor my resume to better match this job description. \
    Return only the tailored resume text.";

/// Builds the user message, embedding both inputs verbatim between their delimiters.
pub fn build_tailor_prompt(resume: &str, job_description: &str) -> String {
    format!(
        "Here is my resume:\n\n\
         {RESUME_START}\n{resume}\n{RESUME_END}\n\n\
         Here is the job description:\n\n\
         {JOB_DESCRIPTION_START}\n{job_description}\n{JOB_DESCRIPTION_END}\n\n\
         {TAILOR_CLOSING}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_both_blocks_in_order() {
        let prompt = build_tailor_prompt("my resume", "the job");

        let resume_at = prompt.find("my resume").unwrap();
        let jd_at = prompt.find("the job").unwrap();
        assert!(prompt.find(RESUME_START).unwrap() < resume_at);
        assert!(resume_at < prompt.find(RESUME_END).unwrap());
        assert!(prompt.find(RESUME_END).unwrap() < prompt.find(JOB_DESCRIPTION_START).unwrap());
        assert!(prompt.find(JOB_DESCRIPTION_START).unwrap() < jd_at);
        assert!(jd_at < prompt.find(JOB_DESCRIPTION_END).unwrap());
    }

    #[test]
    fn test_prompt_is_deterministic() {
        assert_eq!(
            build_tailor_prompt("a", "b"),
            build_tailor_prompt("a", "b")
        );
    }

    #[test]
    fn test_braces_in_input_are_kept_verbatim() {
        let resume = "Skills: {job_description} templating";
        let prompt = build_tailor_prompt(resume, "Go developer");

        assert!(prompt.contains(resume));
        assert_eq!(prompt.matches("Go developer").count(), 1);
    }

    #[test]
    fn test_prompt_ends_with_closing_instruction() {
        assert!(build_tailor_prompt("r", "j").ends_with(TAILOR_CLOSING));
    }

    #[test]
    fn test_prompt_keeps_whitespace_and_newlines() {
        let resume = "  Line one\n\n  Line two  ";
        let prompt = build_tailor_prompt(resume, "jd");
        assert!(prompt.contains(&format!("{RESUME_START}\n{resume}\n{RESUME_END}")));
    }

    #[test]
    fn test_system_instruction_covers_rules() {
        let system = TAILOR_SYSTEM.to_lowercase();
        assert!(system.contains("tailor"));
        assert!(system.contains("keywords"));
        assert!(system.contains("fabricate"));
        assert!(system.contains("professional tone"));
        assert!(system.contains("ats"));
    }
}
