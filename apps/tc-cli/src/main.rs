use clap::{Parser, Subcommand};
use std::error::Error;
use std::str::FromStr;
use tc_cycles::{
    CycleOutcome, CycleParams, EndCondition, IsothermalHeat, ProcessKind, ProcessOptions,
    compute_cycle, compute_process,
};
use tc_props::{
    PropertyId, RawProperty, ResolverOptions, SaturationLookup, StatePoint, Substance,
    filter_catalog, find_substance, resolve, resolve_with_units,
};

#[derive(Parser)]
#[command(name = "tc-cli")]
#[command(about = "ThermoCycle CLI - thermodynamic state and cycle calculator", long_about = None)]
struct Cli {
    /// Emit results as JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    /// Use legacy nearest-row saturation lookup instead of interpolation
    #[arg(long, global = true)]
    nearest: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog substances, optionally filtered
    Substances {
        /// Substring filter over ids, names, and aliases
        query: Option<String>,
    },
    /// Show which input property pairs a substance supports
    Pairs {
        /// Substance id or alias (e.g. water, air, R134a)
        substance: String,
    },
    /// Resolve a full state from two properties
    State {
        /// Substance id or alias
        substance: String,
        /// First property (P, T, s, x)
        prop1: String,
        /// First value
        value1: f64,
        /// Second property
        prop2: String,
        /// Second value
        value2: f64,
        /// Unit for the first value (kPa/bar/atm or °C/K)
        #[arg(long)]
        unit1: Option<String>,
        /// Unit for the second value
        #[arg(long)]
        unit2: Option<String>,
    },
    /// Compute a quasi-static process from a resolved start state
    Process {
        /// Substance id or alias
        substance: String,
        /// Process type: isobaric, isochoric, isothermal, isentropic
        kind: String,
        /// Start state, two assignments like P=101.4 x=0.5 (base units)
        #[arg(long, num_args = 2)]
        start: Vec<String>,
        /// End condition assignment, e.g. T=200 (base units)
        #[arg(long)]
        end: String,
        /// Use the legacy always-zero isothermal heat formula
        #[arg(long)]
        legacy_isothermal_heat: bool,
    },
    /// Compute a fixed-topology cycle
    #[command(subcommand)]
    Cycle(CycleCommands),
}

#[derive(Subcommand)]
enum CycleCommands {
    /// Rankine steam power cycle (real substance)
    Rankine {
        /// Substance id or alias
        #[arg(long, default_value = "water")]
        substance: String,
        /// Condenser pressure [kPa]
        #[arg(long)]
        p_low: f64,
        /// Boiler pressure [kPa]
        #[arg(long)]
        p_high: f64,
    },
    /// Brayton gas-turbine cycle (ideal gas)
    Brayton {
        /// Substance id or alias
        #[arg(long, default_value = "air")]
        substance: String,
        /// Compressor pressure ratio
        #[arg(long)]
        pressure_ratio: f64,
        /// Compressor inlet temperature [°C]
        #[arg(long)]
        t_min: f64,
        /// Turbine inlet temperature [°C]
        #[arg(long)]
        t_max: f64,
    },
    /// Carnot cycle between two reservoir temperatures (real substance)
    Carnot {
        /// Substance id or alias
        #[arg(long, default_value = "water")]
        substance: String,
        /// Cold reservoir temperature [°C]
        #[arg(long)]
        t_min: f64,
        /// Hot reservoir temperature [°C]
        #[arg(long)]
        t_max: f64,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let resolver = ResolverOptions {
        lookup: if cli.nearest {
            SaturationLookup::NearestRow
        } else {
            SaturationLookup::Interpolate
        },
    };

    match cli.command {
        Commands::Substances { query } => cmd_substances(query.as_deref().unwrap_or("")),
        Commands::Pairs { substance } => cmd_pairs(&substance),
        Commands::State {
            substance,
            prop1,
            value1,
            prop2,
            value2,
            unit1,
            unit2,
        } => cmd_state(
            &substance,
            resolver,
            (&prop1, value1, unit1.as_deref()),
            (&prop2, value2, unit2.as_deref()),
            cli.json,
        ),
        Commands::Process {
            substance,
            kind,
            start,
            end,
            legacy_isothermal_heat,
        } => cmd_process(
            &substance,
            resolver,
            &kind,
            &start,
            &end,
            legacy_isothermal_heat,
            cli.json,
        ),
        Commands::Cycle(cycle) => cmd_cycle(cycle, resolver, cli.json),
    }
}

fn lookup_substance(id: &str) -> Result<&'static Substance, Box<dyn Error>> {
    find_substance(id).ok_or_else(|| format!("unknown substance '{id}'").into())
}

fn cmd_substances(query: &str) -> Result<(), Box<dyn Error>> {
    for entry in filter_catalog(query) {
        let model = if entry.substance.is_ideal_gas() {
            "ideal gas"
        } else {
            "real (saturation table)"
        };
        println!("{:<8} {:<32} {model}", entry.canonical_id, entry.display_name);
    }
    Ok(())
}

fn cmd_pairs(substance: &str) -> Result<(), Box<dyn Error>> {
    let substance = lookup_substance(substance)?;
    for (a, b) in substance.supported_pairs() {
        println!("({a}, {b})");
    }
    Ok(())
}

fn cmd_state(
    substance: &str,
    resolver: ResolverOptions,
    first: (&str, f64, Option<&str>),
    second: (&str, f64, Option<&str>),
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let substance = lookup_substance(substance)?;
    let state = resolve_with_units(
        substance,
        resolver,
        RawProperty {
            prop: PropertyId::from_str(first.0)?,
            value: first.1,
            unit: first.2,
        },
        RawProperty {
            prop: PropertyId::from_str(second.0)?,
            value: second.1,
            unit: second.2,
        },
    )?;

    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        print_state(&state);
    }
    Ok(())
}

fn cmd_process(
    substance: &str,
    resolver: ResolverOptions,
    kind: &str,
    start: &[String],
    end: &str,
    legacy_isothermal_heat: bool,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let substance = lookup_substance(substance)?;
    let kind = ProcessKind::from_str(kind)?;

    let a = parse_assignment(&start[0])?;
    let b = parse_assignment(&start[1])?;
    let start_state = resolve(substance, resolver, a, b)?;

    let (end_prop, end_value) = parse_assignment(end)?;
    let options = ProcessOptions {
        resolver,
        isothermal_heat: if legacy_isothermal_heat {
            IsothermalHeat::LegacyZero
        } else {
            IsothermalHeat::EntropyDifference
        },
    };
    let process = compute_process(
        substance,
        &start_state,
        kind,
        EndCondition {
            prop: end_prop,
            value: end_value,
        },
        options,
    )?;

    if json {
        println!("{}", serde_json::to_string_pretty(&process)?);
    } else {
        println!("{kind} process");
        println!("start:");
        print_state(&process.start);
        println!("end:");
        print_state(&process.end);
        println!("W = {:>10.3} kJ/kg", process.w);
        println!("Q = {:>10.3} kJ/kg", process.q);
    }
    Ok(())
}

fn cmd_cycle(
    cycle: CycleCommands,
    resolver: ResolverOptions,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let (substance, params) = match cycle {
        CycleCommands::Rankine {
            substance,
            p_low,
            p_high,
        } => (
            substance,
            CycleParams::Rankine {
                p_low_kpa: p_low,
                p_high_kpa: p_high,
            },
        ),
        CycleCommands::Brayton {
            substance,
            pressure_ratio,
            t_min,
            t_max,
        } => (
            substance,
            CycleParams::Brayton {
                pressure_ratio,
                t_min_c: t_min,
                t_max_c: t_max,
            },
        ),
        CycleCommands::Carnot {
            substance,
            t_min,
            t_max,
        } => (
            substance,
            CycleParams::Carnot {
                t_min_c: t_min,
                t_max_c: t_max,
            },
        ),
    };

    let substance = lookup_substance(&substance)?;
    let outcome = compute_cycle(substance, params, resolver)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print_cycle(&outcome);
    }
    Ok(())
}

/// Parse an assignment like `P=101.4` into a property and value.
fn parse_assignment(text: &str) -> Result<(PropertyId, f64), Box<dyn Error>> {
    let (prop, value) = text
        .split_once('=')
        .ok_or_else(|| format!("expected prop=value, got '{text}'"))?;
    Ok((PropertyId::from_str(prop)?, value.trim().parse()?))
}

fn print_state(state: &StatePoint) {
    println!("  P = {:>12.4} kPa", state.p);
    println!("  T = {:>12.4} °C", state.t);
    println!("  v = {:>12.6} m³/kg", state.v);
    println!("  u = {:>12.3} kJ/kg", state.u);
    println!("  h = {:>12.3} kJ/kg", state.h);
    println!("  s = {:>12.4} kJ/(kg·K)", state.s);
    match state.x {
        Some(x) => println!("  x = {x:>12.4}"),
        None => println!("  x = {:>12}", "-"),
    }
}

fn print_cycle(outcome: &CycleOutcome) {
    println!("{} cycle", outcome.kind);
    for state in &outcome.states {
        println!("state {}:", state.name);
        print_state(&state.point);
    }
    println!("legs:");
    for process in &outcome.processes {
        println!(
            "  {:<12} W = {:>10.3} kJ/kg  Q = {:>10.3} kJ/kg",
            process.kind.to_string(),
            process.w,
            process.q
        );
    }
    let m = &outcome.metrics;
    println!("W_net      = {:>10.3} kJ/kg", m.w_net);
    println!("Q_in       = {:>10.3} kJ/kg", m.q_in);
    println!("Q_out      = {:>10.3} kJ/kg", m.q_out);
    println!("efficiency = {:>10.4}", m.efficiency);
    for term in &m.component_work {
        println!("{:<24} = {:>10.3} kJ/kg", term.label, term.value);
    }
}
