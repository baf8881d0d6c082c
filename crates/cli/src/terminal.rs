use std::io::{self, Write};

use anyhow::Result;
use chrono::NaiveDate;
use crossterm::{
    cursor::MoveTo,
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use serde::Serialize;

use opswall_core::Config;
use opswall_rota::validation::ValidationResult;
use opswall_rota::{DayPlan, DaySchedule, WeekCycle, WeekView};

/// Color scheme for wall output.
struct Colors;

impl Colors {
    const HEADER: Color = Color::Magenta;
    const DATE: Color = Color::Cyan;
    const ASSET: Color = Color::Green;
    const SKIPPED: Color = Color::Yellow;
    const ERROR: Color = Color::Red;
    const DIM: Color = Color::DarkGrey;
}

/// Writes views to stdout, either colored text or JSON.
pub struct Terminal {
    json: bool,
}

impl Terminal {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    pub fn print_resolve(&self, date: NaiveDate, week: &WeekCycle) -> Result<()> {
        if self.json {
            return print_json(week);
        }
        let mut stdout = io::stdout();
        execute!(
            stdout,
            SetForegroundColor(Colors::DATE),
            Print(format!("{}", date)),
            ResetColor,
            Print(format!("  {}\n", week_label(week))),
        )?;
        Ok(())
    }

    pub fn print_schedule(&self, label: &str, schedule: &DaySchedule<'_>) -> Result<()> {
        if self.json {
            return print_json(schedule);
        }
        let mut stdout = io::stdout();
        execute!(
            stdout,
            SetForegroundColor(Colors::HEADER),
            Print(format!("{}\n", label)),
            ResetColor,
        )?;
        self.write_schedule(&mut stdout, schedule)
    }

    pub fn print_day(&self, plan: &DayPlan<'_>) -> Result<()> {
        if self.json {
            return print_json(plan);
        }
        self.write_day(&mut io::stdout(), plan)
    }

    pub fn print_week(&self, view: &WeekView<'_>) -> Result<()> {
        if self.json {
            return print_json(view);
        }
        let mut stdout = io::stdout();
        execute!(
            stdout,
            SetForegroundColor(Colors::HEADER),
            Print(format!("Week of {}  {}\n", view.week.week_start, week_label(&view.week))),
            ResetColor,
        )?;
        for plan in &view.days {
            self.write_day(&mut stdout, plan)?;
        }
        Ok(())
    }

    pub fn print_range(&self, plans: &[DayPlan<'_>]) -> Result<()> {
        if self.json {
            return print_json(plans);
        }
        let mut stdout = io::stdout();
        for plan in plans.iter().filter(|p| p.is_working_day()) {
            self.write_day(&mut stdout, plan)?;
        }
        Ok(())
    }

    pub fn print_validation(&self, result: &ValidationResult) -> Result<()> {
        if self.json {
            return print_json(result);
        }
        let mut stdout = io::stdout();
        for line in result.summary_lines() {
            let color = if line.starts_with("error") {
                Colors::ERROR
            } else {
                Colors::SKIPPED
            };
            execute!(stdout, SetForegroundColor(color), Print(line), ResetColor, Print("\n"))?;
        }
        let verdict = if result.valid { "catalog OK" } else { "catalog INVALID" };
        execute!(
            stdout,
            Print(format!(
                "{} ({} errors, {} warnings)\n",
                verdict,
                result.errors.len(),
                result.warnings.len()
            )),
        )?;
        Ok(())
    }

    pub fn print_config(&self, config: &Config) -> Result<()> {
        let summary = config.redacted_summary();
        if self.json {
            return print_json(&summary);
        }
        let mut stdout = io::stdout();
        for (key, value) in config_lines(&summary) {
            execute!(
                stdout,
                SetForegroundColor(Colors::HEADER),
                Print(format!("{:<10}", key)),
                ResetColor,
                Print(format!("{}\n", value)),
            )?;
        }
        Ok(())
    }

    /// Redraw the wall from the top-left corner.
    pub fn print_wall(&self, plan: &DayPlan<'_>, generation: u64) -> Result<()> {
        if self.json {
            return print_json(plan);
        }
        let mut stdout = io::stdout();
        execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
        self.write_day(&mut stdout, plan)?;
        execute!(
            stdout,
            SetForegroundColor(Colors::DIM),
            Print(format!("\ncatalog generation {}  (Ctrl+C to quit)\n", generation)),
            ResetColor,
        )?;
        stdout.flush()?;
        Ok(())
    }

    fn write_day(&self, out: &mut impl Write, plan: &DayPlan<'_>) -> Result<()> {
        execute!(
            out,
            SetForegroundColor(Colors::DATE),
            Print(day_heading(plan)),
            ResetColor,
            Print("\n"),
        )?;
        if !plan.is_working_day() {
            execute!(out, SetForegroundColor(Colors::DIM), Print("  weekend\n"), ResetColor)?;
            return Ok(());
        }
        self.write_schedule(out, &plan.schedule)
    }

    fn write_schedule(&self, out: &mut impl Write, schedule: &DaySchedule<'_>) -> Result<()> {
        if schedule.is_empty() && schedule.skipped.is_empty() {
            execute!(out, SetForegroundColor(Colors::DIM), Print("  no maintenance scheduled\n"), ResetColor)?;
            return Ok(());
        }
        for line in assignment_lines(schedule) {
            execute!(out, SetForegroundColor(Colors::ASSET), Print(line), ResetColor, Print("\n"))?;
        }
        for skipped in &schedule.skipped {
            execute!(
                out,
                SetForegroundColor(Colors::SKIPPED),
                Print(format!("  ! skipped {}\n", skipped)),
                ResetColor,
            )?;
        }
        Ok(())
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn week_label(week: &WeekCycle) -> String {
    format!(
        "ISO week {} of {}, cycle week {}",
        week.week_in_year, week.iso_year, week.week_in_cycle
    )
}

fn day_heading(plan: &DayPlan<'_>) -> String {
    match plan.weekday {
        Some(day) => format!("{} {}  (week {}, cycle {})", day, plan.date, plan.week.week_in_year, plan.week.week_in_cycle),
        None => format!("{} {}", plan.date.format("%a"), plan.date),
    }
}

fn config_lines(summary: &serde_json::Value) -> Vec<(&'static str, String)> {
    let text = |v: &serde_json::Value| match v {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => "local".to_string(),
        other => other.to_string(),
    };
    vec![
        ("profile", text(&summary["profile"])),
        ("catalog", text(&summary["catalog"]["path"])),
        ("refresh", format!("{}s", text(&summary["wall"]["refresh_secs"]))),
        ("utc", text(&summary["wall"]["utc_offset_minutes"])),
    ]
}

fn assignment_lines(schedule: &DaySchedule<'_>) -> Vec<String> {
    schedule
        .assignments
        .iter()
        .map(|a| {
            let members = if a.team.members.is_empty() {
                String::new()
            } else {
                format!(" ({})", a.team.members.join(", "))
            };
            format!("  {} [{}] -> {}{}", a.asset.name, a.asset.id, a.team.name, members)
        })
        .collect()
}
