//! Microsoft Search answers: bookmarks and Q&As shown above search results.

mod answer_keyword;
mod answer_state;
mod answer_variant;
mod bookmark;
mod qna;
mod search_answer;

pub use answer_keyword::AnswerKeyword;
pub use answer_state::AnswerState;
pub use answer_variant::AnswerVariant;
pub use bookmark::Bookmark;
pub use qna::Qna;
pub use search_answer::{SearchAnswer, SearchAnswerKind};
