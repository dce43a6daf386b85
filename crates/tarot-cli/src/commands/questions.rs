use tarot_core::QuestionBank;
use tarot_core::data::SUGGESTION_COUNT;

pub fn run(lang: &str, all: bool, seed: Option<u64>) -> Result<(), String> {
    let language = super::parse_language(lang)?;
    let bank = QuestionBank::standard().map_err(|e| e.to_string())?;

    let questions = if all {
        bank.questions(language).to_vec()
    } else {
        bank.suggest(language, SUGGESTION_COUNT, &mut super::rng(seed))
    };

    for (i, question) in questions.iter().enumerate() {
        println!("  {}. {question}", i + 1);
    }

    Ok(())
}
