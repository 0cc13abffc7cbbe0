//! Sleep & Lifestyle Health Dashboard - Command Line Entry Point

use std::io::{self, BufRead, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

use sleep_health_core::api::commands::{self, DashboardContext, PredictionReport};
use sleep_health_core::constants::{APP_NAME, APP_VERSION};
use sleep_health_core::logic::config::DashboardConfig;
use sleep_health_core::logic::content;
use sleep_health_core::logic::features::RawAttributeRecord;
use sleep_health_core::logic::timer::MeditationTimer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "sleep-health",
    version,
    about = "Sleep disorder prediction, lifestyle health score and wellness tools"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Predict a sleep disorder and compute the health score
    Predict(PredictArgs),

    /// Body mass index
    Bmi {
        /// Weight in kg
        #[arg(long)]
        weight: f64,
        /// Height in cm
        #[arg(long)]
        height: f64,
    },

    /// Recommended daily water intake
    Hydration {
        /// Weight in kg
        #[arg(long)]
        weight: f64,
    },

    /// Basal metabolic rate and daily calorie need
    Bmr {
        #[arg(long)]
        weight: f64,
        #[arg(long)]
        height: f64,
        #[arg(long)]
        age: f64,
        /// male | female
        #[arg(long)]
        sex: String,
        /// sedentary | light | moderate | active | very-active
        #[arg(long, default_value = "sedentary")]
        activity: String,
    },

    /// Guided breathing countdown
    Meditate {
        /// Duration in minutes (1-10)
        #[arg(long)]
        minutes: Option<u32>,
    },

    /// Sleep myths, foods and lifestyle tips
    Tips,

    /// Answer prompts for each attribute, then show the result
    Interactive,
}

#[derive(Debug, Args)]
struct PredictArgs {
    /// Full record as a JSON object (overrides the attribute flags)
    #[arg(long, value_name = "RAW_RECORD_JSON")]
    json: Option<String>,

    #[arg(long)]
    sleep_hours: Option<f64>,
    #[arg(long)]
    exercise_hours: Option<f64>,
    #[arg(long)]
    screen_time: Option<f64>,
    /// Low | Medium | High
    #[arg(long)]
    stress_level: Option<String>,
    /// Cups per day
    #[arg(long)]
    caffeine_intake: Option<f64>,
    /// Yes | No
    #[arg(long)]
    alcohol_consumption: Option<String>,
    #[arg(long)]
    work_hours: Option<f64>,
    /// Litres per day
    #[arg(long)]
    water_intake: Option<f64>,
    /// Low | Medium | High
    #[arg(long)]
    junk_food_frequency: Option<String>,
    /// Yes | No
    #[arg(long)]
    smoking: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl PredictArgs {
    fn to_raw(&self) -> RawAttributeRecord {
        RawAttributeRecord {
            sleep_hours: self.sleep_hours,
            exercise_hours: self.exercise_hours,
            screen_time: self.screen_time,
            stress_level: self.stress_level.clone(),
            caffeine_intake: self.caffeine_intake,
            alcohol_consumption: self.alcohol_consumption.clone(),
            work_hours: self.work_hours,
            water_intake: self.water_intake,
            junk_food_frequency: self.junk_food_frequency.clone(),
            smoking: self.smoking.clone(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    log::debug!("Starting {} v{}", APP_NAME, APP_VERSION);
    let config = DashboardConfig::from_env();

    match cli.command {
        Command::Predict(args) => {
            let ctx = DashboardContext::new(config)?;
            let report = match &args.json {
                Some(json) => commands::predict_from_json(&ctx, json),
                None => commands::predict_and_score(&ctx, &args.to_raw()),
            }
            .map_err(anyhow::Error::msg)?;

            match args.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
                OutputFormat::Text => print_report(&report),
            }
        }
        Command::Bmi { weight, height } => {
            let reading = commands::calculate_bmi(weight, height).map_err(anyhow::Error::msg)?;
            println!("Your BMI is {:.2} ({})", reading.value, reading.category);
        }
        Command::Hydration { weight } => {
            let litres = commands::calculate_hydration(weight).map_err(anyhow::Error::msg)?;
            println!("You should drink about {:.2} liters of water daily.", litres);
        }
        Command::Bmr {
            weight,
            height,
            age,
            sex,
            activity,
        } => {
            let estimate = commands::calculate_energy(weight, height, age, &sex, &activity)
                .map_err(anyhow::Error::msg)?;
            println!("Your BMR is {:.0} kcal/day", estimate.bmr);
            println!(
                "Daily calorie need ({}): {:.0} kcal",
                estimate.activity.as_str(),
                estimate.daily_calories
            );
        }
        Command::Meditate { minutes } => {
            let timer = MeditationTimer::new(minutes.unwrap_or(config.timer_minutes))?;
            run_meditation(timer)?;
        }
        Command::Tips => print!("{}", content::render()),
        Command::Interactive => {
            let ctx = DashboardContext::new(config)?;
            run_interactive(&ctx)?;
        }
    }

    Ok(())
}

// ============================================================================
// OUTPUT
// ============================================================================

fn print_report(report: &PredictionReport) {
    println!("🩺 Predicted Sleep Disorder: {}", report.prediction.label);
    for share in &report.prediction.shares {
        println!("   {:<20} {:>5.1}%", share.label.as_str(), share.share * 100.0);
    }

    println!("\n🏆 Your Health Score: {}/100", report.health.score);
    for hit in &report.health.penalties {
        println!("   -{:<3} {}", hit.penalty, hit.reason);
    }

    if report.health.badges.is_empty() {
        println!("\nNo badges earned yet. Keep going!");
    } else {
        println!("\n🎖️ Badges Earned:");
        for badge in &report.health.badges {
            println!("   {} {}", badge.icon(), badge);
        }
    }
}

// ============================================================================
// MEDITATION
// ============================================================================

fn run_meditation(timer: MeditationTimer) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("failed to start timer runtime")?;

    runtime.block_on(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(1));
        let mut stdout = io::stdout();

        for frame in timer.frames() {
            interval.tick().await;
            write!(
                stdout,
                "\r⏳ {}  {:<24} {:>3.0}%",
                frame.remaining_label(),
                frame.phase.prompt(),
                frame.progress * 100.0
            )?;
            stdout.flush()?;
        }

        writeln!(stdout, "\n✅ Meditation complete! Hope you feel relaxed.")?;
        Ok::<(), anyhow::Error>(())
    })
}

// ============================================================================
// INTERACTIVE
// ============================================================================

/// Numeric input with the dashboard slider bounds
#[derive(Debug, Clone, Copy)]
struct Slider {
    label: &'static str,
    min: f64,
    max: f64,
}

impl Slider {
    const fn new(label: &'static str, min: f64, max: f64) -> Self {
        Self { label, min, max }
    }

    fn prompt(&self) -> String {
        format!("{} ({}-{})", self.label, self.min, self.max)
    }

    fn accept(&self, answer: &str) -> Option<f64> {
        answer
            .parse::<f64>()
            .ok()
            .filter(|v| (self.min..=self.max).contains(v))
    }
}

const SLEEP_HOURS: Slider = Slider::new("Sleep Hours", 0.0, 12.0);
const EXERCISE_HOURS: Slider = Slider::new("Exercise Hours", 0.0, 5.0);
const SCREEN_TIME: Slider = Slider::new("Screen Time (hrs/day)", 0.0, 15.0);
const CAFFEINE_INTAKE: Slider = Slider::new("Caffeine Intake (cups/day)", 0.0, 10.0);
const WORK_HOURS: Slider = Slider::new("Work Hours per Day", 0.0, 16.0);
const WATER_INTAKE: Slider = Slider::new("Water Intake (liters/day)", 0.0, 10.0);

fn run_interactive(ctx: &DashboardContext) -> Result<()> {
    let choices = commands::get_field_choices(ctx).map_err(anyhow::Error::msg)?;
    let choices_for = |field: &str| -> Vec<String> {
        choices
            .iter()
            .find(|c| c.field == field)
            .map(|c| c.choices.clone())
            .unwrap_or_default()
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("📋 Enter your lifestyle details\n");
    let raw = RawAttributeRecord {
        sleep_hours: Some(prompt_number(&mut lines, &SLEEP_HOURS)?),
        exercise_hours: Some(prompt_number(&mut lines, &EXERCISE_HOURS)?),
        screen_time: Some(prompt_number(&mut lines, &SCREEN_TIME)?),
        stress_level: Some(prompt_choice(
            &mut lines,
            "Stress Level",
            &choices_for("stress_level"),
        )?),
        caffeine_intake: Some(prompt_number(&mut lines, &CAFFEINE_INTAKE)?),
        alcohol_consumption: Some(prompt_choice(
            &mut lines,
            "Alcohol Consumption",
            &choices_for("alcohol_consumption"),
        )?),
        work_hours: Some(prompt_number(&mut lines, &WORK_HOURS)?),
        water_intake: Some(prompt_number(&mut lines, &WATER_INTAKE)?),
        junk_food_frequency: Some(prompt_choice(
            &mut lines,
            "Junk Food Frequency",
            &choices_for("junk_food_frequency"),
        )?),
        smoking: Some(prompt_choice(&mut lines, "Smoking", &choices_for("smoking"))?),
    };

    let report = commands::predict_and_score(ctx, &raw).map_err(anyhow::Error::msg)?;
    println!();
    print_report(&report);
    Ok(())
}

fn read_answer<B: BufRead>(lines: &mut io::Lines<B>, label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;
    let line = lines.next().context("input closed")??;
    Ok(line.trim().to_string())
}

fn prompt_number<B: BufRead>(lines: &mut io::Lines<B>, slider: &Slider) -> Result<f64> {
    loop {
        let answer = read_answer(lines, &slider.prompt())?;
        match slider.accept(&answer) {
            Some(value) => return Ok(value),
            None => println!("  please enter a number from {} to {}", slider.min, slider.max),
        }
    }
}

/// Accepts either the value or its 1-based position in the list
fn prompt_choice<B: BufRead>(
    lines: &mut io::Lines<B>,
    label: &str,
    choices: &[String],
) -> Result<String> {
    let listed = choices
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{}) {}", i + 1, c))
        .collect::<Vec<_>>()
        .join("  ");

    loop {
        let answer = read_answer(lines, &format!("{} [{}]", label, listed))?;
        if let Some(choice) = choices.iter().find(|c| c.eq_ignore_ascii_case(&answer)) {
            return Ok(choice.clone());
        }
        if let Some(choice) = answer
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| choices.get(i))
        {
            return Ok(choice.clone());
        }
        println!("  choose one of: {}", choices.join(", "));
    }
}
