//! Fixed user-facing text and model prompts, per locale
//!
//! The reply and greeting paths use two distinct prompt profiles: the reply
//! persona carries the full formatting rules, the greeting persona is the
//! short one-line variant.

use crate::error::AppError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum Locale {
    /// Korean (default)
    #[default]
    Ko,
    En,
}

impl Locale {
    pub(crate) fn parse(value: Option<&str>) -> Result<Self, AppError> {
        let Some(raw) = value else {
            return Ok(Locale::default());
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Locale::default());
        }
        let base = trimmed
            .split(['-', '_'])
            .next()
            .unwrap_or(trimmed)
            .to_ascii_lowercase();

        match base.as_str() {
            "ko" => Ok(Locale::Ko),
            "en" => Ok(Locale::En),
            _ => Err(AppError::UnsupportedLocale {
                input: trimmed.to_string(),
            }),
        }
    }

    pub(crate) fn texts(self) -> &'static Texts {
        match self {
            Locale::Ko => &KO,
            Locale::En => &EN,
        }
    }
}

/// Sampling settings and system persona for one kind of model call
#[derive(Debug, Clone, Copy)]
pub(crate) struct PromptProfile {
    pub(crate) persona: &'static str,
    pub(crate) max_tokens: u32,
    pub(crate) temperature: f32,
}

pub(crate) struct Texts {
    locale: Locale,
    pub(crate) reply: PromptProfile,
    pub(crate) greeting: PromptProfile,
    pub(crate) greeting_request: &'static str,
    pub(crate) fallback_greeting: &'static str,
    pub(crate) error_prefix: &'static str,
    pub(crate) input_prompt: &'static str,
    pub(crate) note_prompt: &'static str,
    pub(crate) time_prompt: &'static str,
    pub(crate) goodbye: &'static str,
    pub(crate) no_notes: &'static str,
}

impl Texts {
    pub(crate) fn closing_message(&self, tomorrow: &str) -> String {
        match self.locale {
            Locale::Ko => format!(
                "오늘 하루 정말 수고하셨어요. 이제 내일({tomorrow})을 위해 일정을 간단히 정리하고 잠에 들 준비를 해보는 건 어떨까요?\n\
                 시간대와 할 일을 알려주시면 일정을 등록해드리겠습니다."
            ),
            Locale::En => format!(
                "You worked really hard today. How about briefly planning tomorrow ({tomorrow}) and getting ready for bed?\n\
                 Tell me a time and a task, and I will add it to your schedule."
            ),
        }
    }

    pub(crate) fn note_saved(&self, date: &str, time: &str, description: &str) -> String {
        match self.locale {
            Locale::Ko => format!("{date} {time}에 {description} 일정이 저장되었습니다."),
            Locale::En => format!("Saved \"{description}\" for {date} {time}."),
        }
    }

    pub(crate) fn error_reply(&self, detail: &str) -> String {
        format!("{}: {detail}", self.error_prefix)
    }
}

const TEMPERATURE: f32 = 0.7;

static KO: Texts = Texts {
    locale: Locale::Ko,
    reply: PromptProfile {
        persona: "당신은 정서적 지원을 제공하는 AI 친구입니다.

규칙:
1. 모든 답변은 반드시 완성된 문장으로 구성하세요
2. 내담자의 말에 대한 응답
3. 반드시 문장의 맨 마지막에만 질문 형식을 사용하기

스타일:
- 공감적인 태도
- 이전 대화 내용을 참고한 자연스러운 흐름

금지사항:
- 불완전한 문장 사용
- 실질적 도움 제공에 관한 질문",
        max_tokens: 200,
        temperature: TEMPERATURE,
    },
    greeting: PromptProfile {
        persona: "당신은 정서적 지원을 제공하는 AI 친구입니다. 공감하는 태도로 응답해주세요.",
        max_tokens: 50,
        temperature: TEMPERATURE,
    },
    greeting_request: "대화하러 온 내담자를 처음 맞이할 때 사용할 수 있는 따뜻하고 공감적인 인사말을 질문의 형식으로 짧게 생성해주세요. 근무를 마치고 돌아온 상황임을 고려해주세요.",
    fallback_greeting: "안녕하세요. 근무 마치고 오셨네요. 오늘 하루는 어떠셨나요?",
    error_prefix: "오류가 발생했습니다",
    input_prompt: "메시지를 입력하세요 (종료하려면 'q' 입력): ",
    note_prompt: "내일 일정을 입력하세요 (건너뛰려면 Enter): ",
    time_prompt: "시간을 입력하세요 (예: 09:00): ",
    goodbye: "프로그램을 종료합니다.",
    no_notes: "저장된 일정이 없습니다.",
};

static EN: Texts = Texts {
    locale: Locale::En,
    reply: PromptProfile {
        persona: "You are an AI friend who offers emotional support.

Rules:
1. Every answer must consist of complete sentences
2. Respond to what the person said
3. Use a question only as the very last sentence

Style:
- Empathetic attitude
- Natural flow that builds on the conversation so far

Never:
- Use incomplete sentences
- Ask questions offering practical help with tasks",
        max_tokens: 200,
        temperature: TEMPERATURE,
    },
    greeting: PromptProfile {
        persona: "You are an AI friend who offers emotional support. Respond with empathy.",
        max_tokens: 50,
        temperature: TEMPERATURE,
    },
    greeting_request: "Write a short, warm and empathetic greeting, phrased as a question, for welcoming someone who has come to talk. Keep in mind they have just come home from work.",
    fallback_greeting: "Hello, welcome back from work. How was your day today?",
    error_prefix: "An error occurred",
    input_prompt: "Enter a message ('q' to quit): ",
    note_prompt: "Enter a task for tomorrow (press Enter to skip): ",
    time_prompt: "Enter a time (e.g. 09:00): ",
    goodbye: "Exiting.",
    no_notes: "No saved notes.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_defaults_to_korean() {
        assert_eq!(Locale::parse(None).unwrap(), Locale::Ko);
        assert_eq!(Locale::parse(Some("  ")).unwrap(), Locale::Ko);
    }

    #[test]
    fn parse_accepts_region_suffixes() {
        assert_eq!(Locale::parse(Some("ko-KR")).unwrap(), Locale::Ko);
        assert_eq!(Locale::parse(Some("en_US")).unwrap(), Locale::En);
        assert_eq!(Locale::parse(Some("EN")).unwrap(), Locale::En);
    }

    #[test]
    fn parse_rejects_unknown_locale() {
        let err = Locale::parse(Some("xx")).unwrap_err();
        assert_eq!(err.to_string(), "Unsupported locale: xx");
    }

    #[test]
    fn closing_message_interpolates_date() {
        let ko = Locale::Ko.texts().closing_message("2024-01-02");
        assert!(ko.contains("내일(2024-01-02)"));
        assert_eq!(ko.lines().count(), 2);

        let en = Locale::En.texts().closing_message("2024-01-02");
        assert!(en.contains("tomorrow (2024-01-02)"));
    }

    #[test]
    fn error_reply_uses_prefix() {
        assert_eq!(
            Locale::En.texts().error_reply("timeout"),
            "An error occurred: timeout"
        );
        assert_eq!(
            Locale::Ko.texts().error_reply("timeout"),
            "오류가 발생했습니다: timeout"
        );
    }

    #[test]
    fn profiles_keep_reply_and_greeting_budgets_apart() {
        for locale in [Locale::Ko, Locale::En] {
            let texts = locale.texts();
            assert_eq!(texts.reply.max_tokens, 200);
            assert_eq!(texts.greeting.max_tokens, 50);
            assert_ne!(texts.reply.persona, texts.greeting.persona);
        }
    }
}
