//! Conversation session
//!
//! `Session` is the context object for one run: it owns the completion
//! client, the note store and the turn counter. Turns are counted for the
//! lifetime of the session and never reset.

mod reply;

pub(crate) use reply::Reply;

use chrono::NaiveDate;
use tracing::debug;

use crate::completion::{BoxedCompletion, ChatMessage, CompletionRequest};
use crate::consts::TURN_LIMIT;
use crate::error::NoteError;
use crate::notes::NoteStore;
use crate::prompts::{Locale, PromptProfile, Texts};
use crate::utils::{Timezone, format_date, next_day};

pub(crate) struct Session {
    client: BoxedCompletion,
    notes: NoteStore,
    model: String,
    locale: Locale,
    timezone: Timezone,
    turns: u32,
    turn_limit: u32,
}

impl Session {
    pub(crate) fn new(
        client: BoxedCompletion,
        notes: NoteStore,
        model: impl Into<String>,
        locale: Locale,
        timezone: Timezone,
    ) -> Self {
        Self {
            client,
            notes,
            model: model.into(),
            locale,
            timezone,
            turns: 0,
            turn_limit: TURN_LIMIT,
        }
    }

    pub(crate) fn texts(&self) -> &'static Texts {
        self.locale.texts()
    }

    pub(crate) fn turns(&self) -> u32 {
        self.turns
    }

    /// True once replies have switched to the closing message for good
    pub(crate) fn is_finished(&self) -> bool {
        self.turns >= self.turn_limit
    }

    pub(crate) fn notes(&self) -> &NoteStore {
        &self.notes
    }

    /// Answer one user turn.
    ///
    /// The counter is bumped before anything else. From the limit onwards the
    /// closing message is returned and the client is not called. `max_tokens`
    /// overrides the reply profile's output budget when given.
    pub(crate) fn respond(&mut self, user_text: &str, max_tokens: Option<u32>) -> Reply {
        self.turns = self.turns.saturating_add(1);
        debug!(turn = self.turns, limit = self.turn_limit, "user turn");

        if self.is_finished() {
            return Reply::Closing(self.closing_message());
        }

        let profile = self.texts().reply;
        let request = self.request(profile, user_text, max_tokens);
        match self.client.complete(&request) {
            Ok(text) => Reply::Model(text.trim().to_string()),
            Err(e) => {
                debug!(backend = self.client.name(), error = %e, "completion failed");
                Reply::Failed(self.texts().error_reply(&e.to_string()))
            }
        }
    }

    /// Opening line for the session; falls back to a fixed greeting on any failure.
    pub(crate) fn greeting(&self) -> String {
        let texts = self.texts();
        let request = self.request(texts.greeting, texts.greeting_request, None);
        match self.client.complete(&request) {
            Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
            Ok(_) => texts.fallback_greeting.to_string(),
            Err(e) => {
                debug!(backend = self.client.name(), error = %e, "greeting failed, using fallback");
                texts.fallback_greeting.to_string()
            }
        }
    }

    /// Farewell naming tomorrow's date in the session timezone
    pub(crate) fn closing_message(&self) -> String {
        closing_message_for(self.locale, self.timezone.today())
    }

    pub(crate) fn tomorrow(&self) -> String {
        format_date(next_day(self.timezone.today()))
    }

    /// Persist one note and return the confirmation line
    pub(crate) fn save_note(
        &mut self,
        date: &str,
        time: &str,
        description: &str,
    ) -> Result<String, NoteError> {
        let replaced = self.notes.get(date, time).is_some();
        self.notes.insert(date, time, description)?;
        debug!(replaced, total = self.notes.len(), "note stored");
        Ok(self.texts().note_saved(date, time, description))
    }

    fn request(
        &self,
        profile: PromptProfile,
        user_text: &str,
        max_tokens: Option<u32>,
    ) -> CompletionRequest {
        CompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(profile.persona),
                ChatMessage::user(user_text),
            ],
            max_tokens: max_tokens.unwrap_or(profile.max_tokens),
            temperature: profile.temperature,
        }
    }
}

pub(crate) fn closing_message_for(locale: Locale, today: NaiveDate) -> String {
    locale
        .texts()
        .closing_message(&format_date(next_day(today)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::mock::MockCompletion;
    use crate::completion::types::Role;
    use crate::error::CompletionError;

    fn session_with(mock: &MockCompletion, locale: Locale) -> (Session, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let notes = NoteStore::load(dir.path().join("user_schedule.json")).unwrap();
        let session = Session::new(
            Box::new(mock.clone()),
            notes,
            "gpt-3.5-turbo",
            locale,
            Timezone::Named(chrono_tz::UTC),
        );
        (session, dir)
    }

    #[test]
    fn first_nine_turns_delegate_then_close_for_good() {
        let mock = MockCompletion::default();
        let (mut session, _dir) = session_with(&mock, Locale::En);

        for turn in 1..=9 {
            let reply = session.respond("hello", None);
            assert!(matches!(reply, Reply::Model(_)), "turn {turn}: {reply:?}");
            assert_eq!(mock.calls(), turn);
        }
        assert!(!session.is_finished());

        for _ in 0..3 {
            let reply = session.respond("still there?", None);
            assert!(reply.is_closing());
            assert!(reply.text().contains("tomorrow ("));
        }
        assert_eq!(mock.calls(), 9);
        assert_eq!(session.turns(), 12);
        assert!(session.is_finished());
    }

    #[test]
    fn reply_is_trimmed_model_text() {
        let mock = MockCompletion::replying("\n  That sounds like a long day.  \n");
        let (mut session, _dir) = session_with(&mock, Locale::En);

        let reply = session.respond("I'm tired", None);
        assert_eq!(reply, Reply::Model("That sounds like a long day.".to_string()));
    }

    #[test]
    fn request_uses_reply_profile() {
        let mock = MockCompletion::default();
        let (mut session, _dir) = session_with(&mock, Locale::Ko);
        session.respond("", None);

        let requests = mock.requests.borrow();
        let request = &requests[0];
        assert_eq!(request.model, "gpt-3.5-turbo");
        assert_eq!(request.max_tokens, 200);
        assert!((request.temperature - 0.7).abs() < f32::EPSILON);
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, Role::System);
        assert_eq!(request.messages[0].content, Locale::Ko.texts().reply.persona);
        assert_eq!(request.messages[1].role, Role::User);
        assert_eq!(request.messages[1].content, "");
    }

    #[test]
    fn explicit_token_limit_is_forwarded() {
        let mock = MockCompletion::default();
        let (mut session, _dir) = session_with(&mock, Locale::En);
        session.respond("hi", Some(150));
        assert_eq!(mock.requests.borrow()[0].max_tokens, 150);
    }

    #[test]
    fn failure_becomes_prefixed_text() {
        let mock = MockCompletion::failing();
        let (mut session, _dir) = session_with(&mock, Locale::En);

        let reply = session.respond("hello", None);
        assert!(matches!(reply, Reply::Failed(_)));
        assert!(reply.text().starts_with("An error occurred: "));
        assert_eq!(session.turns(), 1);
    }

    #[test]
    fn failed_turns_still_count() {
        let mock = MockCompletion::default();
        for _ in 0..9 {
            mock.push(Err(CompletionError::MissingApiKey));
        }
        let (mut session, _dir) = session_with(&mock, Locale::Ko);

        for _ in 0..9 {
            assert!(session.respond("x", None).text().starts_with("오류가 발생했습니다: "));
        }
        assert!(session.respond("x", None).is_closing());
    }

    #[test]
    fn greeting_uses_short_profile() {
        let mock = MockCompletion::replying(" Welcome home, how did today go? ");
        let (session, _dir) = session_with(&mock, Locale::En);

        assert_eq!(session.greeting(), "Welcome home, how did today go?");
        let requests = mock.requests.borrow();
        assert_eq!(requests[0].max_tokens, 50);
        assert_eq!(requests[0].messages[0].content, Locale::En.texts().greeting.persona);
        assert_eq!(
            requests[0].messages[1].content,
            Locale::En.texts().greeting_request
        );
    }

    #[test]
    fn greeting_does_not_count_as_turn() {
        let mock = MockCompletion::default();
        let (session, _dir) = session_with(&mock, Locale::En);
        session.greeting();
        assert_eq!(session.turns(), 0);
    }

    #[test]
    fn greeting_falls_back_on_failure() {
        let mock = MockCompletion::failing();
        let (session, _dir) = session_with(&mock, Locale::En);
        assert_eq!(
            session.greeting(),
            "Hello, welcome back from work. How was your day today?"
        );
    }

    #[test]
    fn greeting_falls_back_on_blank_text() {
        let mock = MockCompletion::replying("   ");
        let (session, _dir) = session_with(&mock, Locale::Ko);
        assert_eq!(session.greeting(), Locale::Ko.texts().fallback_greeting);
    }

    #[test]
    fn closing_message_names_the_next_day() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
        let text = closing_message_for(Locale::Ko, today);
        assert!(text.contains("2024-02-29"));

        let today = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        let text = closing_message_for(Locale::En, today);
        assert!(text.contains("2025-01-01"));
    }

    #[test]
    fn closing_message_needs_no_turns() {
        let mock = MockCompletion::default();
        let (session, _dir) = session_with(&mock, Locale::En);
        let text = session.closing_message();
        assert!(text.contains(&session.tomorrow()));
        assert_eq!(mock.calls(), 0);
        assert_eq!(session.turns(), 0);
    }

    #[test]
    fn save_note_persists_and_confirms() {
        let mock = MockCompletion::default();
        let (mut session, dir) = session_with(&mock, Locale::Ko);

        let confirmation = session.save_note("2024-01-01", "09:00", "run").unwrap();
        assert_eq!(confirmation, "2024-01-01 09:00에 run 일정이 저장되었습니다.");

        let reloaded = NoteStore::load(dir.path().join("user_schedule.json")).unwrap();
        assert_eq!(reloaded.get("2024-01-01", "09:00"), Some("run"));
        assert_eq!(session.notes().len(), 1);
    }
}
