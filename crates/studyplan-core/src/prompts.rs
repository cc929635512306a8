//! System prompts sent to the generation backend.
//!
//! Three variants exist: the narrative plan (prose only), the structured plan
//! (a bare JSON array of day entries) and the open-domain assistant (never
//! produces plans). Building a prompt is pure: no I/O, no clock access; the
//! reference date is passed in.

use jiff::civil::Date;

/// Default bound, in characters, on reference material embedded in a prompt.
pub const DEFAULT_SUPPLEMENTARY_LIMIT: usize = 1500;

const OPEN_DOMAIN_PROMPT: &str = r#"당신은 한국어로만 대답하는 검색·지식 도우미입니다.

[규칙]
- 질문에 짧고 정확하게 답하세요.
- 공부, 프로그래밍, 상식, 일반 지식 질문 모두에 답할 수 있습니다.
- 사용자가 요청하지 않으면 JSON, 코드 블록, 목록을 쓰지 마세요.
- 학습 계획이나 일정은 만들지 마세요.
- 할 일(투두) 목록은 만들지 마세요.
- 부드럽고 자연스러운 한국어 문장으로 답하세요.
"#;

/// Builds the system prompts for every generation mode.
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    supplementary_limit: usize,
}

impl PromptBuilder {
    /// Creates a builder with the default reference-material bound.
    pub fn new() -> Self {
        Self {
            supplementary_limit: DEFAULT_SUPPLEMENTARY_LIMIT,
        }
    }

    /// Sets how many characters of reference material are embedded.
    pub fn with_supplementary_limit(mut self, limit: usize) -> Self {
        self.supplementary_limit = limit;
        self
    }

    /// Prompt for the prose plan covering exactly `num_days` days.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jiff::civil::date;
    /// use studyplan_core::prompts::PromptBuilder;
    ///
    /// let prompt = PromptBuilder::new().narrative_prompt(5, date(2026, 10, 19), None);
    /// assert!(prompt.contains("exactly 5 days"));
    /// assert!(prompt.contains("Today: 2026-10-19"));
    /// ```
    pub fn narrative_prompt(
        &self,
        num_days: u32,
        reference_date: Date,
        supplementary_text: Option<&str>,
    ) -> String {
        format!(
            r#"You are a study plan writer who answers in Korean.

Write a Korean study plan covering exactly {num_days} days.
For every day include:
- one goal for the day
- 2~4 concrete tasks
- one review or practice item

Write natural Korean prose only.
Never output JSON, code blocks or any other structured markup.

Today: {reference_date}
{reference}"#,
            reference = self.reference_block(supplementary_text),
        )
    }

    /// Prompt for the machine-readable plan: a JSON array of exactly
    /// `num_days` day entries, every todo due `"{reference_date} 23:59"`.
    pub fn structured_plan_prompt(
        &self,
        num_days: u32,
        reference_date: Date,
        supplementary_text: Option<&str>,
    ) -> String {
        let end_time = format!("{reference_date} 23:59");
        format!(
            r#"Output ONLY a JSON array describing a {num_days}-day plan.

### OUTPUT FORMAT
[
  {{
    "day": 1,
    "todos": [
      {{
        "title": "string",
        "content": "string",
        "status_id": "NOT_STARTED",
        "end_time": "{end_time}",
        "accumulated_time": 0
      }}
    ]
  }},
  {{
    "day": 2,
    "todos": [ ...same shape... ]
  }}
]

### RULES
- The array MUST contain exactly {num_days} day entries.
- "day" MUST start at 1 and increase by one per entry.
- Every day MUST contain 2~4 specific, actionable todos. No vague tasks.
- "status_id" is always "NOT_STARTED".
- "end_time" is always "{end_time}".
- "accumulated_time" is always 0.
- Korean text is allowed inside string values only.
- If reference material is given, use its terminology naturally.

### STRICTNESS
- Output the JSON array and nothing else: no explanation, no markdown.
- Do NOT wrap the JSON in code fences.
- The output MUST be syntactically valid JSON.
{reference}"#,
            reference = self.reference_block(supplementary_text),
        )
    }

    /// Prompt for the general-purpose Korean Q&A assistant.
    pub fn open_domain_prompt(&self) -> &'static str {
        OPEN_DOMAIN_PROMPT
    }

    fn reference_block(&self, supplementary_text: Option<&str>) -> String {
        match supplementary_text {
            Some(text) if !text.trim().is_empty() => format!(
                "\n[Reference material]\n{}\n",
                truncate_chars(text, self.supplementary_limit)
            ),
            _ => String::new(),
        }
    }
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns at most the first `limit` characters of `text`.
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_narrative_prompt_requests_day_count_and_prose() {
        let prompt = PromptBuilder::new().narrative_prompt(5, date(2026, 10, 19), None);
        assert!(prompt.contains("exactly 5 days"));
        assert!(prompt.contains("2~4 concrete tasks"));
        assert!(prompt.contains("review or practice"));
        assert!(prompt.contains("Never output JSON"));
        assert!(!prompt.contains("[Reference material]"));
    }

    #[test]
    fn test_structured_prompt_fixes_fields() {
        let prompt = PromptBuilder::new().structured_plan_prompt(5, date(2026, 10, 19), None);
        assert!(prompt.contains("exactly 5 day entries"));
        assert!(prompt.contains("\"end_time\": \"2026-10-19 23:59\""));
        assert!(prompt.contains("\"status_id\": \"NOT_STARTED\""));
        assert!(prompt.contains("\"accumulated_time\": 0"));
        assert!(prompt.contains("start at 1"));
        assert!(prompt.contains("code fences"));
    }

    #[test]
    fn test_reference_material_is_embedded_in_both_plan_prompts() {
        let builder = PromptBuilder::new();
        let text = "Slide 1: Ownership and borrowing";
        let narrative = builder.narrative_prompt(3, date(2026, 1, 2), Some(text));
        let structured = builder.structured_plan_prompt(3, date(2026, 1, 2), Some(text));
        assert!(narrative.contains("[Reference material]\nSlide 1: Ownership and borrowing"));
        assert!(structured.contains("[Reference material]\nSlide 1: Ownership and borrowing"));
    }

    #[test]
    fn test_blank_reference_material_is_omitted() {
        let prompt = PromptBuilder::new().narrative_prompt(3, date(2026, 1, 2), Some("  \n"));
        assert!(!prompt.contains("[Reference material]"));
    }

    #[test]
    fn test_reference_material_is_bounded() {
        let builder = PromptBuilder::new().with_supplementary_limit(4);
        let prompt = builder.narrative_prompt(1, date(2026, 1, 2), Some("가나다라마바사"));
        assert!(prompt.contains("[Reference material]\n가나다라\n"));
        assert!(!prompt.contains("마"));
    }

    #[test]
    fn test_open_domain_prompt_forbids_plans() {
        let prompt = PromptBuilder::new().open_domain_prompt();
        assert!(prompt.contains("한국어"));
        assert!(prompt.contains("학습 계획이나 일정은 만들지 마세요"));
        assert!(prompt.contains("할 일(투두) 목록은 만들지 마세요"));
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("hello", 2), "he");
        assert_eq!(truncate_chars("파이썬", 2), "파이");
        assert_eq!(truncate_chars("", 3), "");
    }
}
