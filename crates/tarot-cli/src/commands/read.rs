use std::io::{self, Write};
use std::path::PathBuf;

use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use tarot_core::{QuestionBank, SessionConfig, SessionController, SessionEvent, TarotError};
use tarot_oracle::{InterpretationClient, OracleConfig};

pub struct ReadArgs {
    pub lang: String,
    pub seed: Option<u64>,
    pub deck: Option<PathBuf>,
    pub model: Option<String>,
    pub question: Option<String>,
}

pub fn run(args: &ReadArgs) -> Result<(), String> {
    let language = super::parse_language(&args.lang)?;
    let deck = super::load_deck(args.deck.as_deref())?;
    let questions = QuestionBank::standard().map_err(|e| e.to_string())?;

    let mut config = SessionConfig::default().with_language(language);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let mut session = SessionController::new(deck, questions, config)
        .map_err(|e| format!("failed to start session: {e}"))?;

    let mut oracle = OracleConfig::from_env();
    if let Some(model) = &args.model {
        oracle = oracle.with_model(model.clone());
    }
    let client = InterpretationClient::from_config(oracle);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("failed to start runtime: {e}"))?;

    let result = runtime.block_on(async {
        // One listener for the whole session: Ctrl-C anywhere ends it.
        let outcome = tokio::select! {
            result = drive(&mut session, &client, args.question.as_deref()) => Some(result),
            _ = tokio::signal::ctrl_c() => None,
        };
        match outcome {
            Some(result) => result,
            None => {
                session.close();
                println!("\n  {}", "Session closed.".yellow());
                Ok(())
            }
        }
    });
    // A pending stdin read cannot be cancelled; don't wait for it.
    runtime.shutdown_background();
    result
}

async fn drive(
    session: &mut SessionController,
    client: &InterpretationClient,
    question: Option<&str>,
) -> Result<(), String> {
    match question {
        Some(question) => one_shot(session, client, question).await,
        None => interactive(session, client).await,
    }
}

async fn one_shot(
    session: &mut SessionController,
    client: &InterpretationClient,
    question: &str,
) -> Result<(), String> {
    session.submit(question).map_err(|e| describe(session, &e))?;
    reveal(session).await;
    reading(session, client).await?;
    session.close();
    Ok(())
}

async fn interactive(
    session: &mut SessionController,
    client: &InterpretationClient,
) -> Result<(), String> {
    println!("  {} Tarot Reading", "Starting".bold());
    println!("  Type a question or a suggestion number. 'lang en|vi' switches language, 'quit' exits.\n");
    print_suggestions(session);

    let mut reader = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let Some(input) = prompt(&mut reader, "? ").await? else {
            break;
        };
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
            break;
        }

        if let Some(code) = input.strip_prefix("lang ") {
            match super::parse_language(code.trim()) {
                Ok(language) => {
                    session.set_language(language);
                    print_suggestions(session);
                }
                Err(e) => println!("  {}\n", e.yellow()),
            }
            continue;
        }

        let question = match input.parse::<usize>() {
            Ok(n) if n >= 1 => match session.choose_suggestion(n - 1).map(str::to_string) {
                Ok(q) => q,
                Err(e) => {
                    println!("  {}\n", describe(session, &e).yellow());
                    continue;
                }
            },
            _ => input,
        };

        if let Err(e) = session.submit(&question) {
            println!("  {}\n", describe(session, &e).yellow());
            session.dismiss_notice();
            continue;
        }
        reveal(session).await;

        let Some(answer) = prompt(
            &mut reader,
            "Press Enter for your reading, or type 'close' to start over: ",
        )
        .await?
        else {
            break;
        };
        if !answer.eq_ignore_ascii_case("close")
            && let Err(e) = reading(session, client).await
        {
            println!("  {}\n", e.yellow());
        }

        session.close();
        print_suggestions(session);
    }

    Ok(())
}

/// Wait out the draw and show the face-up hand.
async fn reveal(session: &mut SessionController) {
    println!("  {}", "Drawing your cards...".dimmed());
    settle(session).await;
    if let Some(hand) = session.hand() {
        println!("{}", super::hand_table(hand, session.language()));
    }
}

/// Request the interpretation, wait out the unveiling, then show it.
async fn reading(
    session: &mut SessionController,
    client: &InterpretationClient,
) -> Result<(), String> {
    let ticket = session.begin_reading().map_err(|e| describe(session, &e))?;
    println!("  {}", "Consulting the cards...".dimmed());

    let text = client.request(ticket.payload()).await;
    session.complete_reading(ticket, &text);
    settle(session).await;

    let text_visible = session.overlay().is_some_and(|overlay| overlay.text_visible);
    if text_visible && let Some(sections) = session.sections() {
        println!();
        print!("{}", super::render_sections(sections, session.language()));
    }
    Ok(())
}

/// Sleep through every pending timer of the live session.
async fn settle(session: &mut SessionController) {
    while let Some(wait) = session.next_timer_in() {
        tokio::time::sleep(wait).await;
        for event in session.tick(wait) {
            tracing::debug!(?event, "session event");
            if event == SessionEvent::FogFading {
                println!("  {}", "The mist begins to part...".dimmed());
            }
        }
    }
}

fn print_suggestions(session: &SessionController) {
    for (i, question) in session.suggestions().iter().enumerate() {
        println!("  {}. {question}", i + 1);
    }
    println!();
}

fn describe(session: &SessionController, error: &TarotError) -> String {
    match error.notice() {
        Some(notice) => notice.message(session.language()).to_string(),
        None => error.to_string(),
    }
}

/// Print a prompt and read one trimmed line; `None` on end of input.
async fn prompt(
    reader: &mut Lines<BufReader<Stdin>>,
    text: &str,
) -> Result<Option<String>, String> {
    print!("{text}");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let line = reader.next_line().await.map_err(|e| e.to_string())?;
    Ok(line.map(|l| l.trim().to_string()))
}
