// All LLM prompt builders for the analysis module.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::prompts::{clip_input, join_list, JSON_ONLY_INSTRUCTION};

/// Placeholder when a prior value is missing or unreadable.
pub const NOT_AVAILABLE: &str = "N/A";

pub fn jd_analysis_prompt(jd_text: &str) -> String {
    format!(
        r#"Analyze the following Job Description and extract key information.

Job Description:
{jd}

{JSON_ONLY_INSTRUCTION}
{{
    "job_role": "Detected Job Title",
    "key_skills": ["Skill1", "Skill2", "Skill3", "Skill4", "Skill5", "Skill6"],
    "experience_required": "e.g., 3-5 years",
    "summary": "A brief 2-sentence summary of the core responsibilities."
}}"#,
        jd = clip_input(jd_text),
    )
}

pub fn resume_match_prompt(job_role: &str, key_skills: &str, resume_text: &str) -> String {
    format!(
        r#"You are an expert Technical Recruiter. Compare this candidate's resume against the job requirements.

Job Title: {job_role}
Key Skills Required: {key_skills}

Candidate Resume:
{resume}

Provide a detailed, unbiased analysis. {JSON_ONLY_INSTRUCTION}
{{
    "match_score": 7,
    "candidate_summary": "A 2-3 sentence summary of the candidate's relevant background and key strengths for this specific role.",
    "skills_found": ["Skill from JD found in Resume", "Another skill found"],
    "missing_skills": ["Important skill from JD NOT found in resume"],
    "strengths": ["A key strength of the candidate relative to the JD"],
    "recommendations": "A concise, actionable piece of advice on how to improve their chances for this specific role (e.g., 'Highlight experience with X', 'Build a project using Y')."
}}
"match_score" is an integer from 1 to 10 representing the overall fit."#,
        resume = clip_input(resume_text),
    )
}

pub fn coach_chat_prompt(
    role: &str,
    skills_found: &[String],
    missing_skills: &[String],
    message: &str,
) -> String {
    format!(
        r#"You are an AI Career Coach helping a candidate bridge their skill gaps for a specific job application.

Context:
- Target Role: {role}
- Skills they have: {found}
- Skills they are missing: {missing}

User's Question: "{message}"

Provide a helpful, practical, and actionable answer in 3-4 sentences.
Focus on giving specific advice, learning resource types (e.g., "look for a course on X"), or project ideas that would help them demonstrate the missing skills. Be encouraging but direct."#,
        found = join_list(skills_found),
        missing = join_list(missing_skills),
    )
}

pub fn ask_ai_prompt(message: &str) -> String {
    format!(
        r#"You are Career Compass, a friendly, professional, and direct AI career counselor.
Your goal is to provide helpful, actionable advice to users' career questions.
Keep your answers concise (around 3-5 sentences) and practical.

User's Question:
"{message}""#
    )
}

pub fn job_suggestion_prompt(resume_text: &str) -> String {
    format!(
        r#"You are an expert AI Career Coach. Analyze the following resume to identify the candidate's core strengths, skills, and experience level.
Based on this profile, suggest 3 distinct types of job roles that would be a strong fit.

Resume:
{resume}

{JSON_ONLY_INSTRUCTION}
{{
  "profile_summary": "A concise 2-3 sentence summary of the candidate's professional profile.",
  "suggested_roles": [
    {{
      "role_title": "A specific, common job title (e.g., 'Frontend Developer', 'Data Analyst')",
      "reason": "A 1-2 sentence explanation of why this role is a good fit based on their resume.",
      "example_jobs": [
        {{
          "title": "A realistic example job title",
          "company": "A well-known company that hires for this role",
          "location": "Example location (e.g., 'Remote', 'New York, NY')",
          "apply_link": "https://www.linkedin.com/jobs/search/?keywords=Title+Here"
        }},
        {{
          "title": "Another example job title",
          "company": "Another company",
          "location": "Another location",
          "apply_link": "https://www.linkedin.com/jobs/search/?keywords=Title+Here"
        }}
      ]
    }}
  ]
}}
Repeat the role object for 2 more role suggestions, 3 in total."#,
        resume = clip_input(resume_text),
    )
}
