//! # Toolkit CLI Application
//!
//! Menu-driven terminal interface over the toolkit_core engine. Every tool
//! prints a formatted summary followed by the result as pretty JSON, so the
//! output doubles as API documentation.

use std::io::{self, BufRead, Write};

use chrono::NaiveDate;
use serde::Serialize;

use toolkit_core::calculations::{
    age, area, date_difference, emi, gst, interest, percentage, profit_loss, text_stats,
};
use toolkit_core::calculations::{
    AgeInput, CompoundingFrequency, DateDifferenceInput, GstInput, GstMode, InterestInput,
    LoanInput, ProfitLossInput, Shape,
};
use toolkit_core::currency::{self, COMMON_CURRENCIES};
use toolkit_core::qr;
use toolkit_core::timezone::{self, COMMON_TIMEZONES};
use toolkit_core::{convert, list_units, ToolError, UnitCategory};

// ============================================================================
// Prompt Helpers
// ============================================================================

fn prompt_line(prompt: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return String::new();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    prompt_line(prompt).parse().unwrap_or(default)
}

fn prompt_u32(prompt: &str, default: u32) -> u32 {
    prompt_line(prompt).parse().unwrap_or(default)
}

fn prompt_date(prompt: &str, default: NaiveDate) -> NaiveDate {
    NaiveDate::parse_from_str(&prompt_line(prompt), "%Y-%m-%d").unwrap_or(default)
}

fn print_json<T: Serialize>(value: &T) {
    if let Ok(json) = serde_json::to_string_pretty(value) {
        println!();
        println!("JSON Output (for LLM/API use):");
        println!("{}", json);
    }
}

fn print_error(error: &ToolError) {
    eprintln!("Error: {}", error);
    if let Ok(json) = serde_json::to_string_pretty(error) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

// ============================================================================
// Tool Runners
// ============================================================================

fn run_emi() {
    let principal = prompt_f64("Loan amount [100000]: ", 100000.0);
    let rate = prompt_f64("Annual interest rate % [9.0]: ", 9.0);
    let years = prompt_f64("Term in years [10]: ", 10.0);

    let input = LoanInput {
        principal,
        annual_rate_percent: rate,
        term_years: years,
    };
    match emi::calculate(&input) {
        Ok(result) => {
            println!();
            println!("Monthly payment: {:.2}", result.monthly_payment);
            println!(
                "Total payment:   {:.2} over {} months",
                result.total_payment, result.term_months
            );
            println!("Total interest:  {:.2}", result.total_interest);
            print_json(&result);
        }
        Err(e) => print_error(&e),
    }
}

fn run_gst() {
    let amount = prompt_f64("Amount [1000]: ", 1000.0);
    let rate = prompt_f64("GST rate % (5/12/18/28 or custom) [18]: ", 18.0);
    let mode = if prompt_line("Amount includes GST? (y/N): ").eq_ignore_ascii_case("y") {
        GstMode::Inclusive
    } else {
        GstMode::Exclusive
    };

    let input = GstInput {
        amount,
        rate_percent: rate,
        mode,
    };
    match gst::calculate(&input) {
        Ok(result) => {
            println!();
            println!("Net amount:  {:.2}", result.amount_excluding_gst);
            println!("GST amount:  {:.2}", result.gst_amount);
            println!("Gross total: {:.2}", result.total_amount);
            print_json(&result);
        }
        Err(e) => print_error(&e),
    }
}

fn run_percentage() {
    println!("  1. X% of Y");
    println!("  2. X is what percent of Y");
    println!("  3. Percentage change from X to Y");
    match prompt_line("Choose [1]: ").as_str() {
        "2" => {
            let part = prompt_f64("Part [25]: ", 25.0);
            let whole = prompt_f64("Whole [200]: ", 200.0);
            match percentage::is_what_percent(part, whole) {
                Ok(p) => println!("{} is {:.2}% of {}", part, p, whole),
                Err(e) => print_error(&e),
            }
        }
        "3" => {
            let from = prompt_f64("From [100]: ", 100.0);
            let to = prompt_f64("To [75]: ", 75.0);
            match percentage::percentage_change(from, to) {
                Ok(result) => {
                    println!("{} -> {}: {}", from, to, result.label());
                    print_json(&result);
                }
                Err(e) => print_error(&e),
            }
        }
        _ => {
            let percent = prompt_f64("Percent [15]: ", 15.0);
            let value = prompt_f64("Of value [80]: ", 80.0);
            match percentage::percent_of(percent, value) {
                Ok(p) => println!("{}% of {} = {:.4}", percent, value, p),
                Err(e) => print_error(&e),
            }
        }
    }
}

fn run_interest() {
    let principal = prompt_f64("Principal [10000]: ", 10000.0);
    let rate = prompt_f64("Annual rate % [5.0]: ", 5.0);
    let years = prompt_f64("Years [3]: ", 3.0);

    let input = InterestInput {
        principal,
        annual_rate_percent: rate,
        term_years: years,
    };

    println!("Compounding frequency:");
    for (i, f) in CompoundingFrequency::ALL.iter().enumerate() {
        println!("  {}. {}", i + 1, f.display_name());
    }
    let choice = prompt_u32("Choose [1]: ", 1) as usize;
    let frequency = CompoundingFrequency::ALL
        .get(choice.saturating_sub(1))
        .copied()
        .unwrap_or_default();

    match (interest::simple(&input), interest::compound(&input, frequency)) {
        (Ok(simple), Ok(compound)) => {
            println!();
            println!(
                "Simple interest:   {:.2} (total {:.2})",
                simple.interest, simple.total_amount
            );
            println!(
                "Compound ({}): {:.2} (total {:.2})",
                frequency.display_name(),
                compound.interest,
                compound.total_amount
            );
            print_json(&compound);
        }
        (Err(e), _) | (_, Err(e)) => print_error(&e),
    }
}

fn run_unit_conversion() {
    println!("Category:");
    for (i, category) in UnitCategory::ALL.iter().enumerate() {
        println!("  {}. {}", i + 1, category.display_name());
    }
    let choice = prompt_u32("Choose [1]: ", 1) as usize;
    let category = *UnitCategory::ALL
        .get(choice.saturating_sub(1))
        .unwrap_or(&UnitCategory::Length);

    println!("Units:");
    for unit in list_units(category) {
        println!("  {:8} {}", unit.id, unit.label);
    }
    let from = prompt_line("From unit id: ");
    let to = prompt_line("To unit id: ");
    let value = prompt_f64("Value [1.0]: ", 1.0);

    match convert(category, &from, &to, value) {
        Ok(result) => {
            println!();
            println!("{} {} = {:.6} {}", value, from, result.output_value, to);
            println!("Formula: {}", result.formula);
            print_json(&result);
        }
        Err(e) => print_error(&e),
    }
}

fn run_area() {
    println!("  1. Square");
    println!("  2. Rectangle");
    println!("  3. Circle");
    println!("  4. Triangle");
    let shape = match prompt_line("Choose [1]: ").as_str() {
        "2" => Shape::Rectangle {
            length: prompt_f64("Length [4]: ", 4.0),
            width: prompt_f64("Width [3]: ", 3.0),
        },
        "3" => Shape::Circle {
            radius: prompt_f64("Radius [2]: ", 2.0),
        },
        "4" => Shape::Triangle {
            base: prompt_f64("Base [6]: ", 6.0),
            height: prompt_f64("Height [4]: ", 4.0),
            sides: None,
        },
        _ => Shape::Square {
            side: prompt_f64("Side [5]: ", 5.0),
        },
    };

    match area::calculate(&shape) {
        Ok(result) => {
            println!();
            println!("Area: {:.4}", result.area);
            match result.perimeter {
                Some(p) => println!("Perimeter: {:.4}", p),
                None => println!("Perimeter: (needs all three sides)"),
            }
            print_json(&result);
        }
        Err(e) => print_error(&e),
    }
}

fn run_age() {
    let today = chrono::Local::now().date_naive();
    let birth = prompt_date("Birth date (YYYY-MM-DD) [1990-06-15]: ", default_birth_date());
    let input = AgeInput {
        birth_date: birth,
        as_of_date: today,
    };

    match age::calculate(&input) {
        Ok(result) => {
            println!();
            println!(
                "Age: {} years, {} months, {} days",
                result.years, result.months, result.days
            );
            println!("Days until next birthday: {}", result.days_until_next_birthday);
            print_json(&result);
        }
        Err(e) => print_error(&e),
    }
}

fn default_birth_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1990, 6, 15).unwrap_or_default()
}

fn run_date_difference() {
    let start = prompt_date("Start date (YYYY-MM-DD) [2024-01-01]: ", default_start_date());
    let end = prompt_date("End date (YYYY-MM-DD) [today]: ", chrono::Local::now().date_naive());
    let input = DateDifferenceInput {
        start_date: start,
        end_date: end,
    };

    match date_difference::calculate(&input) {
        Ok(result) => {
            println!();
            if result.swapped {
                println!("(dates were reversed; showing the absolute span)");
            }
            println!(
                "Span: {} years, {} months, {} days",
                result.years, result.months, result.days
            );
            println!(
                "Totals: {} days, {} weeks, {} hours",
                result.total_days, result.weeks, result.hours
            );
            print_json(&result);
        }
        Err(e) => print_error(&e),
    }
}

fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default()
}

fn run_profit_loss() {
    let input = ProfitLossInput {
        cost_price: prompt_f64("Cost price per unit [100]: ", 100.0),
        selling_price: prompt_f64("Selling price per unit [120]: ", 120.0),
        quantity: prompt_u32("Quantity [1]: ", 1),
        extra_expenses: prompt_f64("Extra expenses [0]: ", 0.0),
    };

    match profit_loss::calculate(&input) {
        Ok(result) => {
            println!();
            let label = if result.is_profit { "Profit" } else { "Loss" };
            println!(
                "{}: {:.2} ({:.2}%)",
                label,
                result.profit_or_loss.abs(),
                result.percentage
            );
            match result.margin_percent {
                Some(m) => println!("Margin: {:.2}% of revenue", m),
                None => println!("Margin: n/a (no revenue)"),
            }
            print_json(&result);
        }
        Err(e) => print_error(&e),
    }
}

fn run_text_stats() {
    println!("Enter text (finish with an empty line):");
    let mut text = String::new();
    loop {
        let line = prompt_line("");
        if line.is_empty() {
            break;
        }
        text.push_str(&line);
        text.push('\n');
    }

    let stats = text_stats::analyze(&text);
    println!();
    println!("Words:      {}", stats.words);
    println!("Characters: {}", stats.characters);
    println!("Sentences:  {}", stats.sentences);
    println!("Paragraphs: {}", stats.paragraphs);
    print_json(&stats);
}

fn run_currency() {
    println!("Currencies:");
    for c in COMMON_CURRENCIES {
        println!("  {}  {}  {}", c.code, c.symbol, c.name);
    }
    let from = prompt_line("From currency [USD]: ");
    let from = if from.is_empty() { "USD".to_string() } else { from.to_uppercase() };
    let to = prompt_line("To currency [EUR]: ");
    let to = if to.is_empty() { "EUR".to_string() } else { to.to_uppercase() };
    let amount = prompt_f64("Amount [100]: ", 100.0);

    println!("Fetching rates...");
    match currency::rates_or_fallback(&from) {
        Ok(table) => match table.convert(amount, &to) {
            Ok(converted) => {
                println!();
                println!(
                    "{}{:.2} = {}{:.2}",
                    currency::symbol_for(&from),
                    amount,
                    currency::symbol_for(&to),
                    converted
                );
                if table.source == currency::RateSource::Fallback {
                    println!("(offline; using built-in approximate rates)");
                }
            }
            Err(e) => print_error(&e),
        },
        Err(e) => print_error(&e),
    }
}

fn run_world_clock() {
    println!("Zones:");
    for (i, zone) in COMMON_TIMEZONES.iter().enumerate() {
        println!("  {:2}. {}", i + 1, zone);
    }
    let raw = prompt_line("Zone (number or IANA id) [Asia/Tokyo]: ");
    let zone = match raw.parse::<usize>() {
        Ok(n) => COMMON_TIMEZONES
            .get(n.saturating_sub(1))
            .map(|z| z.to_string())
            .unwrap_or_else(|| "Asia/Tokyo".to_string()),
        Err(_) if raw.is_empty() => "Asia/Tokyo".to_string(),
        Err(_) => raw,
    };

    match timezone::wall_clock_now(&zone) {
        Ok(result) => {
            println!();
            println!("{}: {} (UTC{})", result.zone_id, result.local_time, result.utc_offset);
            print_json(&result);
        }
        Err(e) => print_error(&e),
    }
}

fn run_qr() {
    let data = prompt_line("Text or link to encode: ");
    let size = prompt_u32("Image size in pixels [200]: ", qr::DEFAULT_SIZE_PX);

    match qr::qr_code_url(&data, size) {
        Ok(url) => {
            println!();
            println!("QR image URL:");
            println!("{}", url);
        }
        Err(e) => print_error(&e),
    }
}

// ============================================================================
// Menu Loop
// ============================================================================

const MENU: &[(&str, fn())] = &[
    ("EMI Calculator", run_emi),
    ("GST Calculator", run_gst),
    ("Percentage Calculator", run_percentage),
    ("Interest Calculator", run_interest),
    ("Unit Converter", run_unit_conversion),
    ("Area Calculator", run_area),
    ("Age Calculator", run_age),
    ("Date Difference", run_date_difference),
    ("Profit/Loss Calculator", run_profit_loss),
    ("Word Counter", run_text_stats),
    ("Currency Converter", run_currency),
    ("World Clock", run_world_clock),
    ("QR Code Generator", run_qr),
];

fn main() {
    println!("Toolkit CLI - Calculators and Converters");
    println!("========================================");

    loop {
        println!();
        for (i, (name, _)) in MENU.iter().enumerate() {
            println!("  {:2}. {}", i + 1, name);
        }
        println!("   q. Quit");

        let choice = prompt_line("Select tool: ");
        if choice.eq_ignore_ascii_case("q") {
            break;
        }

        match choice.parse::<usize>() {
            Ok(n) if (1..=MENU.len()).contains(&n) => {
                println!();
                MENU[n - 1].1();
            }
            _ => println!("Unrecognized choice: {}", choice),
        }
    }
}
