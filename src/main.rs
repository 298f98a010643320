//! nacrypt command-line interface.
//!
//! Argument parsing, mode resolution, password prompting and exit-code
//! plumbing; the codec itself lives in the library.

use clap::Parser;
use log::LevelFilter;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use nacrypt::consts::{MEMLIMIT_DEFAULT, OPSLIMIT_DEFAULT};
use nacrypt::{decrypt, encrypt, resolve, Mode, NacryptError, Operation, Password};

#[derive(Parser)]
#[command(
    name = "nacrypt",
    version,
    about = "Password-based file encryption with authenticated chunked streams"
)]
struct Cli {
    /// Input file
    input: PathBuf,

    /// Output file
    #[arg(short, long)]
    output: PathBuf,

    /// Force encrypt mode (default: detect from file content)
    #[arg(short, long, conflicts_with = "decrypt")]
    encrypt: bool,

    /// Force decrypt mode (default: detect from file content)
    #[arg(short, long)]
    decrypt: bool,

    /// Argon2id time cost for encryption (persisted in the file)
    #[arg(long, default_value_t = OPSLIMIT_DEFAULT)]
    opslimit: u32,

    /// Argon2id memory cost in bytes for encryption (persisted in the file)
    #[arg(long, default_value_t = MEMLIMIT_DEFAULT)]
    memlimit: u32,

    /// Print verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .format_timestamp(None)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("FATAL: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), NacryptError> {
    let declared = if cli.encrypt {
        Mode::Encrypt
    } else if cli.decrypt {
        Mode::Decrypt
    } else {
        Mode::Unspecified
    };

    let mut input = BufReader::new(File::open(&cli.input)?);
    let mut output = BufWriter::new(File::create(&cli.output)?);

    // Resolve (and thus parse + validate the header) before prompting, so an
    // invalid file never costs the user a KDF wait.
    let operation = resolve(&mut input, declared)?;

    match operation {
        Operation::Encrypt => {
            let password = prompt_new_password()?;
            encrypt(&mut input, &mut output, &password, cli.opslimit, cli.memlimit)?;
        }
        Operation::Decrypt(header) => {
            let password = prompt_password("Please enter password: ")?;
            decrypt(&mut input, &mut output, &password, &header)?;
        }
    }

    output.flush()?;
    Ok(())
}

fn prompt_password(prompt: &str) -> Result<Password, NacryptError> {
    let raw = rpassword::prompt_password(prompt)?;
    let password = Password::new(raw);
    if password.is_empty() {
        return Err(NacryptError::Crypto("empty password".into()));
    }
    Ok(password)
}

fn prompt_new_password() -> Result<Password, NacryptError> {
    let password = prompt_password("Please create a password: ")?;
    let confirmation = prompt_password("Enter password again: ")?;
    if !password.ct_eq(&confirmation) {
        return Err(NacryptError::Crypto("passwords didn't match".into()));
    }
    Ok(password)
}
