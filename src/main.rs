use std::path::PathBuf;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use slicebank::app::{bank_store, counter_store, quiz_store, Services};
use slicebank::config::Config;
use slicebank::features::counter::{self, CounterReducer, CounterState};
use slicebank::features::quiz::{self, QuizReducer, QuizStatus};
use slicebank::features::{account, customer};
use slicebank::logging::init_tracing;
use slicebank::money::Money;
use slicebank::store::{Dispatchable, Dispatched, Store};

#[derive(Debug, Parser)]
#[command(name = "slicebank", version, about = "Drive the reducer store from the command line")]
struct Cli {
    /// Config file (default: ~/.config/slicebank/config.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Apply account/customer operations in order and print the final state.
    ///
    /// Ops: deposit:AMOUNT[:CUR], withdraw:AMOUNT, loan:AMOUNT:PURPOSE,
    /// payloan, customer:NAME:ID, rename:NAME
    Bank {
        #[arg(required = true)]
        ops: Vec<BankOp>,
    },
    /// Apply counter operations and print state plus the derived date.
    ///
    /// Ops: inc, dec, set:N, step:N, reset
    Counter {
        /// Step to count with until a `step:N` op; `reset` goes back to step 1.
        #[arg(long, default_value_t = 1)]
        step: i64,
        ops: Vec<CounterOp>,
    },
    /// Fetch questions, optionally play through them, print the quiz state.
    Quiz {
        /// Option index to pick for each question, in order.
        #[arg(long = "answer")]
        answers: Vec<usize>,
    },
}

#[derive(Debug, Clone)]
enum BankOp {
    Deposit {
        amount: Money,
        currency: Option<String>,
    },
    Withdraw(Money),
    Loan(Money, String),
    PayLoan,
    Customer { name: String, id: String },
    Rename(String),
}

impl FromStr for BankOp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        let money = |raw: &str| raw.parse::<Money>().map_err(|e| e.to_string());
        match parts.as_slice() {
            ["deposit", amount] => Ok(BankOp::Deposit {
                amount: money(amount)?,
                currency: None,
            }),
            ["deposit", amount, currency] => Ok(BankOp::Deposit {
                amount: money(amount)?,
                currency: Some(currency.to_string()),
            }),
            ["withdraw", amount] => Ok(BankOp::Withdraw(money(amount)?)),
            ["loan", amount, purpose] => Ok(BankOp::Loan(money(amount)?, purpose.to_string())),
            ["payloan"] => Ok(BankOp::PayLoan),
            ["customer", name, id] => Ok(BankOp::Customer {
                name: name.to_string(),
                id: id.to_string(),
            }),
            ["rename", name] => Ok(BankOp::Rename(name.to_string())),
            _ => Err(format!("unrecognized bank op '{}'", s)),
        }
    }
}

#[derive(Debug, Clone)]
enum CounterOp {
    Inc,
    Dec,
    Set(i64),
    Step(i64),
    Reset,
}

impl FromStr for CounterOp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number = |raw: &str| raw.parse::<i64>().map_err(|e| format!("'{}': {}", raw, e));
        match s.split_once(':') {
            None if s == "inc" => Ok(CounterOp::Inc),
            None if s == "dec" => Ok(CounterOp::Dec),
            None if s == "reset" => Ok(CounterOp::Reset),
            Some(("set", n)) => Ok(CounterOp::Set(number(n)?)),
            Some(("step", n)) => Ok(CounterOp::Step(number(n)?)),
            _ => Err(format!("unrecognized counter op '{}'", s)),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    match cli.command {
        Command::Bank { ops } => run_bank(&config, ops).await,
        Command::Counter { step, ops } => run_counter(&config, step, ops),
        Command::Quiz { answers } => run_quiz(&config, answers).await,
    }
}

/// Dispatch and, for spawned thunks, wait until the follow-up actions land.
async fn dispatch_settled(store: &Store, value: impl Into<Dispatchable>) -> Result<()> {
    if let Dispatched::Spawned(task) = store.dispatch(value)? {
        task.await.context("thunk task failed")?;
    }
    Ok(())
}

fn print_state(store: &Store) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&store.state_json())?);
    Ok(())
}

async fn run_bank(config: &Config, ops: Vec<BankOp>) -> Result<()> {
    let services = Services::from_config(config)?;
    let store = bank_store()?;

    let commits = Arc::new(AtomicUsize::new(0));
    let tally = Arc::clone(&commits);
    let _subscription = store.subscribe(move || {
        tally.fetch_add(1, Ordering::Relaxed);
    });

    for op in ops {
        let value: Dispatchable = match op {
            BankOp::Deposit { amount, currency } => match currency {
                Some(currency) => {
                    account::deposit_in(amount, &currency, Arc::clone(&services.converter))
                }
                None => account::deposit(amount).into(),
            },
            BankOp::Withdraw(amount) => account::withdraw(amount).into(),
            BankOp::Loan(amount, purpose) => account::request_loan(amount, purpose).into(),
            BankOp::PayLoan => account::pay_loan().into(),
            BankOp::Customer { name, id } => customer::create_customer(name, id).into(),
            BankOp::Rename(name) => customer::update_name(name).into(),
        };
        dispatch_settled(&store, value).await?;
    }

    tracing::info!(commits = commits.load(Ordering::Relaxed), "bank run finished");
    print_state(&store)
}

fn run_counter(config: &Config, step: i64, ops: Vec<CounterOp>) -> Result<()> {
    let store = counter_store(CounterState { step, count: 0 })?;

    for op in ops {
        let action = match op {
            CounterOp::Inc => counter::increment(),
            CounterOp::Dec => counter::decrement(),
            CounterOp::Set(n) => counter::set_count(n),
            CounterOp::Step(n) => counter::set_step(n),
            CounterOp::Reset => counter::reset(),
        };
        store.dispatch(action)?;
    }

    print_state(&store)?;
    if let Some(state) = store.get_state().slice::<CounterReducer>() {
        match state.date_from(config.counter.base_date) {
            Some(date) => println!("{}", date.format("%a %b %d %Y")),
            None => println!("date out of range"),
        }
    }
    Ok(())
}

async fn run_quiz(config: &Config, answers: Vec<usize>) -> Result<()> {
    let services = Services::from_config(config)?;
    let store = quiz_store()?;

    dispatch_settled(&store, quiz::fetch_questions(services.questions)).await?;

    let loaded = store
        .get_state()
        .slice::<QuizReducer>()
        .context("quiz slice missing")?;
    if loaded.status == QuizStatus::Error {
        print_state(&store)?;
        bail!("could not load questions: {}", loaded.error_message);
    }

    if !answers.is_empty() {
        store.dispatch(quiz::start())?;
        let total = answers.len();
        for (i, option) in answers.into_iter().enumerate() {
            store.dispatch(quiz::new_answer(option))?;
            if i + 1 < total {
                store.dispatch(quiz::next_question())?;
            }
        }
        store.dispatch(quiz::finish())?;
    }

    print_state(&store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bank_ops() {
        assert!(matches!(
            "deposit:300".parse::<BankOp>(),
            Ok(BankOp::Deposit { currency: None, .. })
        ));
        assert!(matches!(
            "deposit:10.50:EUR".parse::<BankOp>(),
            Ok(BankOp::Deposit { currency: Some(ref c), .. }) if c == "EUR"
        ));
        assert!(matches!(
            "loan:1000:home".parse::<BankOp>(),
            Ok(BankOp::Loan(_, ref p)) if p == "home"
        ));
        assert!(matches!("payloan".parse::<BankOp>(), Ok(BankOp::PayLoan)));
        assert!("loan:1000".parse::<BankOp>().is_err());
        assert!("deposit:ten".parse::<BankOp>().is_err());
    }

    #[test]
    fn parses_counter_ops() {
        assert!(matches!("inc".parse::<CounterOp>(), Ok(CounterOp::Inc)));
        assert!(matches!("step:3".parse::<CounterOp>(), Ok(CounterOp::Step(3))));
        assert!(matches!("set:-4".parse::<CounterOp>(), Ok(CounterOp::Set(-4))));
        assert!("step:x".parse::<CounterOp>().is_err());
        assert!("jump".parse::<CounterOp>().is_err());
    }

    #[test]
    fn counter_step_help_mentions_reset() {
        use clap::CommandFactory;

        let cli = Cli::command();
        let counter = cli.find_subcommand("counter").unwrap();
        let step = counter
            .get_arguments()
            .find(|arg| arg.get_id() == "step")
            .unwrap();
        let help = step.get_help().unwrap().to_string();
        assert!(help.contains("reset"), "got: {help}");
        assert!(!help.to_lowercase().contains("initial"), "got: {help}");
    }

    #[test]
    fn cli_parses_bank_subcommand() {
        let cli = Cli::try_parse_from(["slicebank", "bank", "deposit:300", "payloan"]).unwrap();
        assert!(matches!(cli.command, Command::Bank { ref ops } if ops.len() == 2));
    }
}
