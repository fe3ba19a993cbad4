//! Text shown to the player. Everything here is pure formatting.

mod menu;
mod quiz;
mod result;

pub use menu::{
    count_out_of_range, count_prompt, menu_lines, menu_prompt, INVALID_CHOICE, NOT_A_NUMBER,
};
pub use quiz::{answer_prompt, question_lines, INVALID_OPTION, START};
pub use result::{final_score, verdict, CLOSING, NO_QUESTIONS_LOADED, NO_QUESTIONS_SELECTED};
