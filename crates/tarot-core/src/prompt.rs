//! Interpretation request payloads.
//!
//! [`build_prompt`] is pure: the same question, cards, and language always
//! produce the same payload. The template is chosen by language alone.

use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::error::{TarotError, TarotResult};
use crate::hand::{HAND_SIZE, Position};
use crate::language::Language;

/// Persona given to the interpretation service as the system message.
pub const SYSTEM_PERSONA: &str = "You are a wise and compassionate tarot reader.";

/// Upper bound on the length of each paragraph of the reading.
pub const WORDS_PER_PARAGRAPH: usize = 60;

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Instructions that frame the whole conversation.
    System,
    /// The request itself.
    User,
}

/// One message of an interpretation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Who is speaking.
    pub role: Role,
    /// Message text.
    pub content: String,
}

/// The conversation for an interpretation request.
///
/// Model and token settings are added by the client that sends it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptPayload {
    /// Ordered messages: the persona, then the templated request.
    pub messages: Vec<ChatMessage>,
}

impl PromptPayload {
    /// Text of the first message with the given role.
    pub fn content(&self, role: Role) -> Option<&str> {
        self.messages
            .iter()
            .find(|m| m.role == role)
            .map(|m| m.content.as_str())
    }
}

/// Build the interpretation request for a question and a Past/Present/Future hand.
///
/// Fails with [`TarotError::InvalidArgument`] unless exactly three cards are given.
pub fn build_prompt(question: &str, cards: &[Card], language: Language) -> TarotResult<PromptPayload> {
    if cards.len() != HAND_SIZE {
        return Err(TarotError::InvalidArgument(format!(
            "a reading needs {HAND_SIZE} cards, got {}",
            cards.len()
        )));
    }

    let question = question.trim();
    let user = match language {
        Language::En => english_request(question, cards),
        Language::Vi => vietnamese_request(question, cards),
    };

    Ok(PromptPayload {
        messages: vec![
            ChatMessage {
                role: Role::System,
                content: SYSTEM_PERSONA.to_string(),
            },
            ChatMessage {
                role: Role::User,
                content: user,
            },
        ],
    })
}

fn card_lines(cards: &[Card], language: Language) -> String {
    Position::ALL
        .iter()
        .zip(cards)
        .enumerate()
        .map(|(i, (position, card))| format!("{}. {}: {}", i + 1, position.label(language), card.name))
        .collect::<Vec<_>>()
        .join("\n")
}

fn english_request(question: &str, cards: &[Card]) -> String {
    format!(
        "Question: {question}\n\
         Cards drawn:\n\
         {cards}\n\n\
         Give a tarot reading for this question. Answer in exactly 4 paragraphs \
         separated by a blank line, each paragraph at most {WORDS_PER_PARAGRAPH} words: \
         the first about the Past card, the second about the Present card, the third \
         about the Future card, and the fourth an overall message. \
         Do not add headings or labels.",
        cards = card_lines(cards, Language::En),
    )
}

fn vietnamese_request(question: &str, cards: &[Card]) -> String {
    format!(
        "Câu hỏi: {question}\n\
         Các lá bài đã rút:\n\
         {cards}\n\n\
         Hãy giải bài tarot cho câu hỏi này bằng tiếng Việt. Trả lời đúng 4 đoạn văn, \
         cách nhau bởi một dòng trống, mỗi đoạn không quá {WORDS_PER_PARAGRAPH} từ: \
         đoạn thứ nhất về lá bài Quá khứ, đoạn thứ hai về lá bài Hiện tại, đoạn thứ ba \
         về lá bài Tương lai, và đoạn thứ tư là thông điệp tổng quan. \
         Không thêm tiêu đề hay nhãn.",
        cards = card_lines(cards, Language::Vi),
    )
}
