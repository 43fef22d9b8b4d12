// Prompt constants for job description extraction.

/// JD extraction prompt template. Replace `{jd_text}` before sending.
pub const JD_PARSE_PROMPT_TEMPLATE: &str = r#"Analyze this job description and extract in VALID JSON format only (no extra text):

{
    "role": "Job title",
    "experience_level": "Fresher|Junior|Mid|Senior",
    "technical_skills": ["Python", "React", "Docker"],
    "soft_skills": ["leadership", "communication"],
    "responsibilities": ["Build features", "Code review"],
    "tools": ["AWS", "Git", "Jira"],
    "difficulty": "easy|medium|hard"
}

Job Description:
{jd_text}

Respond with ONLY valid JSON:
"#;

/// Sample job description offered on the empty page.
pub const SAMPLE_JD: &str = "Senior Python Developer (3-5 years)
Skills: Python, Django, PostgreSQL, Docker, AWS
Responsibilities: Build scalable APIs, lead team, code review";

/// Builds the extraction prompt for a job description.
pub fn build_jd_parse_prompt(jd_text: &str) -> String {
    JD_PARSE_PROMPT_TEMPLATE.replace("{jd_text}", jd_text)
}
