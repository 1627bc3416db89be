use tarikh::{ExtractionDetails, ExtractionVerbose, PhraseCandidate};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_run(input: &str, anchor: &str, run: &ExtractionVerbose, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Extracting: \"{}\"", input.trim()), ansi::CYAN)));
    println!("   {} {}", palette.dim("anchor:"), palette.paint(anchor, ansi::YELLOW));

    println!("\n{}", palette.paint("━━━ Locator ━━━", ansi::GRAY));
    print_locator(&run.details, &palette);

    println!("\n{}", palette.paint("━━━ Dispatch ━━━", ansi::GRAY));
    println!(
        "  {} {}  {} {}",
        palette.dim("mode:"),
        palette.paint(run.details.mode.as_str(), ansi::BLUE),
        palette.dim("│ strategy:"),
        palette.paint(&run.details.strategy, ansi::CYAN),
    );
    if run.details.fell_back {
        println!("  {}", palette.paint("⚠ unresolved; anchor date used", ansi::YELLOW));
    }

    println!("\n{}", palette.paint("━━━ Result ━━━", ansi::GRAY));
    let raw = if run.result.raw.is_empty() { palette.dim("(none)") } else { palette.bold(&run.result.raw) };
    println!("  {} {}", palette.dim("raw:  "), raw);
    println!("  {} {}", palette.dim("start:"), palette.paint(run.result.start_date.to_string(), ansi::GREEN));
    println!("  {} {}", palette.dim("end:  "), palette.paint(run.result.end_date.to_string(), ansi::GREEN));

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!("  Total: {}", palette.paint(format!("{:?}", run.details.elapsed), ansi::GREEN));
    println!();
}

fn print_locator(details: &ExtractionDetails, palette: &ansi::Palette) {
    println!(
        "  {} {}",
        palette.paint("Active rules:", ansi::BLUE),
        palette.dim(format!("{} ({})", details.active_rules.len(), details.active_rules.join(", ")))
    );

    if details.candidates.is_empty() {
        println!("  {}", palette.dim("No phrase candidates"));
        println!("\n  {}", palette.dim("Tip: RUST_LOG=tarikh=debug shows every dispatch decision"));
        return;
    }

    for (idx, candidate) in details.candidates.iter().enumerate() {
        println!("  {} {}", palette.paint(format!("[{}]", idx), ansi::GRAY), fmt_candidate(candidate, palette));
    }
}

fn fmt_candidate(candidate: &PhraseCandidate, palette: &ansi::Palette) -> String {
    let marker = if candidate.selected { palette.paint("✓", ansi::GREEN) } else { palette.dim("·") };
    let body = candidate.body.trim();
    let body = if candidate.selected { palette.bold(palette.paint(body, ansi::GREEN)) } else { body.to_string() };
    format!(
        "{} {} {} {} {}",
        marker,
        body,
        palette.dim("│"),
        palette.paint(format!("span {}..{}", candidate.start, candidate.end), ansi::YELLOW),
        palette.dim(format!("{} ({})", candidate.rule, candidate.class.as_str())),
    )
}
