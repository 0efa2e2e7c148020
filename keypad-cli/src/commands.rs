//! Runners behind each subcommand. They write to any `io::Write` so the
//! binary can hand them stdout and tests can hand them a buffer.

use std::{cell::Cell, io::Write, rc::Rc};

use anyhow::{Context, Result};
use keypad_core::{
    DisplayAmount, Key, Keypad, KeypadUpdate, StoredAmount, format_amount, format_currency,
};
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::KeypadConfig;

/// Existing amount to start a `press` session from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Seed {
    pub major: Option<u64>,
    pub minor: Option<u64>,
}

/// Replays `keys` on a keypad and prints one line per notification.
///
/// The first line (key `-`) is the rendering before any key is pressed.
/// Each following line shows the key, the raw buffer, the display form with
/// currency symbol, and the flat amount.
pub fn run_press<W: Write>(
    config: &KeypadConfig,
    keys: &str,
    seed: Seed,
    out: &mut W,
) -> Result<()> {
    let keys = Key::parse_sequence(keys, &config.locale)
        .with_context(|| format!("cannot read keys '{keys}'"))?;

    let mut keypad = Keypad::editing(
        config.locale.clone(),
        config.entry,
        seed.major,
        seed.minor,
    );

    let notifications = Rc::new(Cell::new(0usize));
    let counter = Rc::clone(&notifications);
    keypad.subscribe(move |_: &DisplayAmount, _: Decimal| counter.set(counter.get() + 1));

    write_line(out, config, '-', keypad.buffer(), &keypad.current())?;
    for key in &keys {
        let update = keypad.press(*key);
        write_line(
            out,
            config,
            key.symbol(&config.locale),
            keypad.buffer(),
            &update,
        )?;
    }

    let stored = StoredAmount::from(&keypad.current().amount);
    info!(
        main_amount = stored.main_amount,
        decimal_amount = stored.decimal_amount,
        notifications = notifications.get(),
        "session finished"
    );
    Ok(())
}

fn write_line<W: Write>(
    out: &mut W,
    config: &KeypadConfig,
    key: char,
    buffer: &str,
    update: &KeypadUpdate,
) -> Result<()> {
    writeln!(
        out,
        "{key} | {buffer:<20} | {}{}{} | {}",
        config.locale.currency_symbol,
        config.locale.symbol_separator,
        update.amount,
        format_amount(update.flat, &config.locale),
    )
    .context("cannot write output")
}

/// Prints `amount` as a locale currency string.
pub fn run_format<W: Write>(
    config: &KeypadConfig,
    amount: Decimal,
    out: &mut W,
) -> Result<()> {
    debug!(%amount, "formatting amount");
    writeln!(out, "{}", format_currency(amount, &config.locale)).context("cannot write output")
}

/// Prints the stored `(main, decimal)` split of a receipt subtotal as TOML,
/// followed by how it reads back in the transaction list.
pub fn run_split<W: Write>(
    config: &KeypadConfig,
    subtotal: Decimal,
    out: &mut W,
) -> Result<()> {
    let stored = StoredAmount::from_subtotal(subtotal)
        .with_context(|| format!("cannot split subtotal {subtotal}"))?;
    let text = toml::to_string(&stored).context("cannot serialize stored amount")?;

    write!(out, "{text}").context("cannot write output")?;
    writeln!(
        out,
        "# {}",
        format_currency(stored.to_decimal(), &config.locale)
    )
    .context("cannot write output")
}
