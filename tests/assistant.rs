//! Assistant tests (keyword routing, localized replies).

#[path = "assistant/classify.rs"]
mod classify;
#[path = "assistant/replies.rs"]
mod replies;
