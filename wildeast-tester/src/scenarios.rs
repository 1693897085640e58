use anyhow::{Result, ensure};
use colored::Colorize;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use wildeast_tours::{
    CarouselInput, Direction, DismissSource, Site, TourCarousel, Transition, decode_text,
};

const FUZZ_STEPS: usize = 250;

pub struct ScenarioCtx<'a> {
    pub site: &'a Site,
    pub seed: u64,
}

type ScenarioFn = fn(&ScenarioCtx<'_>) -> Result<()>;

#[derive(Clone, Copy)]
pub struct Scenario {
    pub name: &'static str,
    pub description: &'static str,
    run: ScenarioFn,
}

const SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "smoke",
        description: "Boot, browse one step each way, open and close the itinerary",
        run: smoke,
    },
    Scenario {
        name: "wraparound",
        description: "Next from the last tour and previous from the first wrap around",
        run: wraparound,
    },
    Scenario {
        name: "inverse-laws",
        description: "next then previous (and the reverse) return to the start from every tour",
        run: inverse_laws,
    },
    Scenario {
        name: "overlay-lock",
        description: "Navigation is rejected while the itinerary is open; every dismiss closes it",
        run: overlay_lock,
    },
    Scenario {
        name: "open-wins",
        description: "Open and navigate in the same tick opens on the starting tour",
        run: open_wins,
    },
    Scenario {
        name: "composer-roundtrip",
        description: "Every deep link decodes to its message, with RefID and dates lines",
        run: composer_roundtrip,
    },
    Scenario {
        name: "input-fuzz",
        description: "Seeded random input ticks checked against a reference model",
        run: input_fuzz,
    },
];

#[must_use]
pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    SCENARIOS.iter().map(|s| (s.name, s.description)).collect()
}

#[must_use]
pub fn get_scenario(name: &str) -> Option<Scenario> {
    SCENARIOS.iter().copied().find(|s| s.name == name)
}

#[must_use]
pub fn all_scenario_names() -> Vec<String> {
    SCENARIOS.iter().map(|s| s.name.to_string()).collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub seed: u64,
    pub passed: bool,
    pub iterations_run: usize,
    pub successful_iterations: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub average_duration: Duration,
}

pub struct ScenarioRunner {
    verbose: bool,
}

impl ScenarioRunner {
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn run_scenario(
        &self,
        scenario: &Scenario,
        site: &Site,
        seeds: &[u64],
        iterations: usize,
    ) -> Vec<ScenarioResult> {
        seeds
            .iter()
            .map(|&seed| {
                if self.verbose {
                    println!(
                        "🧪 Testing scenario: {} (seed: {seed})",
                        scenario.name.bright_white()
                    );
                }
                self.run_single(scenario, site, seed, iterations)
            })
            .collect()
    }

    fn run_single(
        &self,
        scenario: &Scenario,
        site: &Site,
        seed: u64,
        iterations: usize,
    ) -> ScenarioResult {
        let mut successes = 0;
        let mut failures = Vec::new();
        let mut durations = Vec::with_capacity(iterations);

        for i in 0..iterations {
            let iteration_seed = seed.wrapping_add(u64::try_from(i).unwrap_or(u64::MAX));
            let ctx = ScenarioCtx {
                site,
                seed: iteration_seed,
            };
            let start = Instant::now();
            let outcome = (scenario.run)(&ctx);
            durations.push(start.elapsed());
            match outcome {
                Ok(()) => successes += 1,
                Err(err) => {
                    let message = format!("Iteration {} (seed {iteration_seed}): {err:#}", i + 1);
                    log::warn!("{}: {message}", scenario.name);
                    if self.verbose {
                        println!("  ❌ {}", message.clone().red());
                    }
                    failures.push(message);
                }
            }
        }

        let average_duration = if durations.is_empty() {
            Duration::ZERO
        } else {
            durations.iter().sum::<Duration>() / u32::try_from(durations.len()).unwrap_or(1)
        };

        ScenarioResult {
            scenario_name: scenario.name.to_string(),
            seed,
            passed: failures.is_empty(),
            iterations_run: iterations,
            successful_iterations: successes,
            failures,
            average_duration,
        }
    }
}

fn smoke(ctx: &ScenarioCtx<'_>) -> Result<()> {
    let mut carousel = ctx.site.carousel();
    ensure!(carousel.active_index() == 0, "session must start on the first tour");
    ensure!(!carousel.is_open(), "overlay must start closed");
    ensure!(
        carousel.direction() == Direction::Still,
        "direction must start neutral"
    );

    carousel.next();
    carousel.previous();
    ensure!(carousel.active_index() == 0, "next/previous did not return to start");

    let opened = carousel.open();
    ensure!(
        opened == Transition::Opened { index: 0 },
        "open produced {opened:?}"
    );
    let tour = carousel
        .showing_tour()
        .ok_or_else(|| anyhow::anyhow!("overlay open without a tour"))?;
    let text = ctx
        .site
        .deep_link(tour)
        .text()
        .ok_or_else(|| anyhow::anyhow!("deep link carries no text"))?;
    ensure!(
        text.contains(&format!("RefID: {}", tour.id)),
        "message lacks reference line"
    );
    carousel.close();
    ensure!(!carousel.is_open(), "close left the overlay open");
    Ok(())
}

fn wraparound(ctx: &ScenarioCtx<'_>) -> Result<()> {
    let len = ctx.site.catalog().len().get();
    let mut carousel = ctx.site.carousel();
    carousel.previous();
    ensure!(
        carousel.active_index() == len - 1,
        "previous from first landed on {}",
        carousel.active_index()
    );
    ensure!(carousel.direction() == Direction::Backward, "direction not backward");
    carousel.next();
    ensure!(carousel.active_index() == 0, "next from last did not wrap to first");
    ensure!(carousel.direction() == Direction::Forward, "direction not forward");

    for _ in 0..len {
        carousel.next();
    }
    ensure!(
        carousel.active_index() == 0,
        "{len} steps forward did not complete a cycle"
    );
    Ok(())
}

fn inverse_laws(ctx: &ScenarioCtx<'_>) -> Result<()> {
    let len = ctx.site.catalog().len().get();
    for start in 0..len {
        let mut carousel = ctx.site.carousel();
        for _ in 0..start {
            carousel.next();
        }
        carousel.next();
        carousel.previous();
        ensure!(
            carousel.active_index() == start,
            "next∘previous broke at {start}"
        );
        carousel.previous();
        carousel.next();
        ensure!(
            carousel.active_index() == start,
            "previous∘next broke at {start}"
        );
    }
    Ok(())
}

fn overlay_lock(ctx: &ScenarioCtx<'_>) -> Result<()> {
    let mut carousel = ctx.site.carousel();
    carousel.next();
    let index = carousel.active_index();
    carousel.open();
    ensure!(carousel.open() == Transition::Unchanged, "second open changed state");

    for input in [CarouselInput::Next, CarouselInput::Previous] {
        let transition = carousel.apply(input);
        ensure!(
            matches!(transition, Transition::NavigationLocked { .. }),
            "{input:?} while open produced {transition:?}"
        );
        ensure!(carousel.active_index() == index, "index moved while open");
    }
    ensure!(
        carousel.apply(CarouselInput::ContentClick) == Transition::Unchanged,
        "content click changed state"
    );
    ensure!(carousel.is_open(), "content click closed the overlay");
    ensure!(
        !carousel.navigation_enabled(),
        "arrows enabled while overlay open"
    );

    let mut closed = Vec::new();
    for input in [
        CarouselInput::CloseItinerary,
        CarouselInput::Dismiss(DismissSource::Backdrop),
        CarouselInput::Dismiss(DismissSource::CloseButton),
        CarouselInput::Dismiss(DismissSource::EscapeKey),
    ] {
        let mut copy = carousel.clone();
        ensure!(
            copy.apply(input) == Transition::Closed { index },
            "{input:?} did not close"
        );
        ensure!(
            copy.apply(input) == Transition::Unchanged,
            "{input:?} twice was not idempotent"
        );
        closed.push(copy.snapshot());
    }
    ensure!(
        closed.windows(2).all(|pair| pair[0] == pair[1]),
        "dismiss sources diverged"
    );
    Ok(())
}

fn open_wins(ctx: &ScenarioCtx<'_>) -> Result<()> {
    for tick in [
        [CarouselInput::Next, CarouselInput::OpenItinerary],
        [CarouselInput::OpenItinerary, CarouselInput::Previous],
    ] {
        let mut carousel = ctx.site.carousel();
        let transitions = carousel.apply_tick(&tick);
        ensure!(carousel.active_index() == 0, "{tick:?} navigated");
        ensure!(
            transitions.contains(&Transition::Opened { index: 0 }),
            "{tick:?} did not open on the starting tour: {transitions:?}"
        );
    }
    Ok(())
}

fn composer_roundtrip(ctx: &ScenarioCtx<'_>) -> Result<()> {
    let composer = ctx.site.composer();
    let prefix = format!("{}?text=", composer.link_prefix());
    for tour in ctx.site.catalog() {
        let link = ctx.site.deep_link(tour);
        ensure!(
            link.as_str().starts_with(&prefix),
            "{} link has wrong prefix: {link}",
            tour.id
        );
        let decoded = decode_text(link.as_str())
            .ok_or_else(|| anyhow::anyhow!("{} link has no text", tour.id))?;
        ensure!(
            decoded == composer.compose_text(tour),
            "{} decoded text differs",
            tour.id
        );
        ensure!(
            decoded
                .lines()
                .any(|line| line == format!("RefID: {}", tour.id)),
            "{} missing reference line",
            tour.id
        );
        ensure!(
            decoded.contains(&tour.title),
            "{} message omits title",
            tour.id
        );
        let has_dates_line = decoded.lines().any(|line| line.starts_with("Dates: "));
        ensure!(
            has_dates_line == tour.dates().is_some(),
            "{} dates line presence mismatch",
            tour.id
        );
    }
    Ok(())
}

/// Reference model for the carousel: index and the tour the overlay shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Model {
    index: usize,
    showing: Option<usize>,
}

impl Model {
    fn apply(&mut self, input: CarouselInput, len: usize, tick_opens: bool) {
        match input {
            CarouselInput::Next if self.showing.is_none() && !tick_opens => {
                self.index = (self.index + 1) % len;
            }
            CarouselInput::Previous if self.showing.is_none() && !tick_opens => {
                self.index = (self.index + len - 1) % len;
            }
            CarouselInput::OpenItinerary if self.showing.is_none() => {
                self.showing = Some(self.index);
            }
            CarouselInput::CloseItinerary | CarouselInput::Dismiss(_) => self.showing = None,
            _ => {}
        }
    }
}

fn random_input(rng: &mut ChaCha8Rng) -> CarouselInput {
    match rng.gen_range(0..8) {
        0 | 1 => CarouselInput::Next,
        2 => CarouselInput::Previous,
        3 => CarouselInput::OpenItinerary,
        4 => CarouselInput::CloseItinerary,
        5 => CarouselInput::Dismiss(DismissSource::Backdrop),
        6 => CarouselInput::Dismiss(DismissSource::EscapeKey),
        _ => CarouselInput::ContentClick,
    }
}

fn input_fuzz(ctx: &ScenarioCtx<'_>) -> Result<()> {
    let len = ctx.site.catalog().len().get();
    let mut rng = ChaCha8Rng::seed_from_u64(ctx.seed);
    let mut carousel: TourCarousel = ctx.site.carousel();
    let mut model = Model {
        index: 0,
        showing: None,
    };

    for step in 0..FUZZ_STEPS {
        let tick_len = if rng.gen_bool(0.2) { 2 } else { 1 };
        let tick: Vec<CarouselInput> = (0..tick_len).map(|_| random_input(&mut rng)).collect();
        let tick_opens = tick.contains(&CarouselInput::OpenItinerary);
        for &input in &tick {
            model.apply(input, len, tick_opens);
        }
        carousel.apply_tick(&tick);

        let actual = Model {
            index: carousel.active_index(),
            showing: carousel.snapshot().overlay.showing(),
        };
        ensure!(
            actual == model,
            "step {step} {tick:?}: expected {model:?}, got {actual:?}"
        );
        ensure!(
            carousel.navigation_enabled() == model.showing.is_none(),
            "step {step}: arrow state disagrees with overlay"
        );
    }
    Ok(())
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_micros().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let micros = u128::deserialize(deserializer)?;
        Ok(Duration::from_micros(u64::try_from(micros).unwrap_or(0)))
    }
}
