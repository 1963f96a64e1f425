use clap::{Parser, Subcommand, ValueEnum};
use pf_core::{PfError, PfResult};
use pf_fluids::{DensityBasis, Direction, DualResult, Product, input, mass_to_volume,
    volume_correction_factor, volume_to_mass};
use pf_results::{ConversionRecord, TripRecord, format_density, format_mass, format_percent,
    format_temperature, format_volume};
use pf_trip::{TripDelta, TripPoint, TripResult, calculate_trip};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pf-cli")]
#[command(about = "Petroflow CLI - petroleum mass/volume and trip loss calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert between mass and volume with density correction
    #[command(subcommand)]
    Convert(ConvertCommands),
    /// Show the volume correction factor for a density/temperature pair
    Vcf {
        /// Density at 15 °C in kg/l
        #[arg(long)]
        density: String,
        /// Cargo temperature in °C
        #[arg(long)]
        temperature: String,
        #[arg(long, value_enum, default_value = "refined")]
        product: ProductArg,
    },
    /// Compute trip losses across a route file
    Trip {
        /// Path to the route YAML file
        route_path: PathBuf,
        /// Emit the result as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum ConvertCommands {
    /// Kilograms to liters at 15 °C and at cargo temperature
    MassToVolume {
        /// Mass in kilograms
        #[arg(long)]
        mass: String,
        /// Density in kg/l
        #[arg(long)]
        density: String,
        /// Cargo temperature in °C
        #[arg(long)]
        temperature: String,
        /// Which temperature the supplied density refers to
        #[arg(long, value_enum, default_value = "at15")]
        basis: BasisArg,
        #[arg(long, value_enum, default_value = "refined")]
        product: ProductArg,
        /// Emit the result as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Liters to kilograms at 15 °C and at cargo temperature
    VolumeToMass {
        /// Volume in liters
        #[arg(long)]
        volume: String,
        /// Density in kg/l
        #[arg(long)]
        density: String,
        /// Cargo temperature in °C
        #[arg(long)]
        temperature: String,
        /// Which temperature the supplied density refers to
        #[arg(long, value_enum, default_value = "at15")]
        basis: BasisArg,
        #[arg(long, value_enum, default_value = "refined")]
        product: ProductArg,
        /// Emit the result as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ProductArg {
    #[default]
    Refined,
    Crude,
}

impl From<ProductArg> for Product {
    fn from(arg: ProductArg) -> Self {
        match arg {
            ProductArg::Refined => Product::Refined,
            ProductArg::Crude => Product::Crude,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, ValueEnum, Deserialize)]
enum BasisArg {
    #[default]
    #[serde(rename = "at15")]
    At15,
    #[serde(rename = "at-temperature")]
    AtTemperature,
}

impl From<BasisArg> for DensityBasis {
    fn from(arg: BasisArg) -> Self {
        match arg {
            BasisArg::At15 => DensityBasis::AtReference,
            BasisArg::AtTemperature => DensityBasis::AtTemperature,
        }
    }
}

fn main() -> PfResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert(convert_cmd) => match convert_cmd {
            ConvertCommands::MassToVolume {
                mass,
                density,
                temperature,
                basis,
                product,
                json,
            } => cmd_convert(
                Direction::MassToVolume,
                &mass,
                &density,
                &temperature,
                basis,
                product,
                json,
            ),
            ConvertCommands::VolumeToMass {
                volume,
                density,
                temperature,
                basis,
                product,
                json,
            } => cmd_convert(
                Direction::VolumeToMass,
                &volume,
                &density,
                &temperature,
                basis,
                product,
                json,
            ),
        },
        Commands::Vcf {
            density,
            temperature,
            product,
        } => cmd_vcf(&density, &temperature, product),
        Commands::Trip { route_path, json } => cmd_trip(&route_path, json),
    }
}

fn cmd_convert(
    direction: Direction,
    quantity: &str,
    density: &str,
    temperature: &str,
    basis: BasisArg,
    product: ProductArg,
    json: bool,
) -> PfResult<()> {
    let density = input::parse_density(density, "density")?;
    let temperature = input::parse_temperature(temperature, "temperature")?;

    let result = match direction {
        Direction::MassToVolume => mass_to_volume(
            input::parse_mass(quantity, "mass")?,
            density,
            temperature,
            basis.into(),
            product.into(),
        ),
        Direction::VolumeToMass => volume_to_mass(
            input::parse_volume(quantity, "volume")?,
            density,
            temperature,
            basis.into(),
            product.into(),
        ),
    };

    if json {
        let record = ConversionRecord::from_result(&result);
        println!("{}", to_json(&record)?);
        return Ok(());
    }

    print_dual_result(direction, &result);
    Ok(())
}

fn to_json<T: serde::Serialize>(record: &T) -> PfResult<String> {
    serde_json::to_string_pretty(record).map_err(|err| PfError::Malformed {
        what: err.to_string(),
    })
}

fn print_dual_result(direction: Direction, result: &DualResult) {
    let (label, unit, format_quantity): (_, _, fn(f64) -> String) = match direction {
        Direction::MassToVolume => ("Volume", "l", format_volume),
        Direction::VolumeToMass => ("Mass", "kg", format_mass),
    };

    println!("{} at 15 °C:     {} {}", label, format_quantity(result.at_reference), unit);
    println!("{} at cargo T:   {} {}", label, format_quantity(result.at_temperature), unit);
    println!(
        "Difference:        {} {} ({}%)",
        format_quantity(result.difference()),
        unit,
        format_percent(result.percent_difference())
    );
    println!("Density at 15 °C:  {} kg/l", format_density(result.density15_kg_l()));
    println!("Density at T:      {} kg/l", format_density(result.density_at_t_kg_l()));
}

fn cmd_vcf(density: &str, temperature: &str, product: ProductArg) -> PfResult<()> {
    let density = input::parse_density(density, "density")?;
    let temperature = input::parse_temperature(temperature, "temperature")?;
    let product: Product = product.into();

    let vcf = volume_correction_factor(density, temperature, product);
    println!("VCF for {}: {vcf:.6}", product.label());
    Ok(())
}

/// Route file: product plus ordered measurement points, numeric fields as
/// raw text so they flow through the same validation as interactive input.
///
/// ```yaml
/// product: refined
/// points:
///   - name: loading terminal
///     mass: "3200000"
///     density: "0,846"
///     temperature: "23"
///     basis: at-temperature
/// ```
#[derive(Debug, Deserialize)]
struct RouteFile {
    #[serde(default)]
    product: ProductArg,
    points: Vec<RoutePoint>,
}

#[derive(Debug, Deserialize)]
struct RoutePoint {
    #[serde(default)]
    name: String,
    mass: String,
    density: String,
    temperature: String,
    #[serde(default)]
    basis: BasisArg,
}

fn cmd_trip(route_path: &Path, json: bool) -> PfResult<()> {
    let text = std::fs::read_to_string(route_path)?;
    let route: RouteFile = serde_yaml::from_str(&text).map_err(|err| PfError::Malformed {
        what: format!("{}: {err}", route_path.display()),
    })?;

    tracing::debug!(points = route.points.len(), "route file loaded");

    let points = route
        .points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let field = |name: &str| format!("points[{i}].{name}");
            Ok(TripPoint::new(
                point.name.clone(),
                input::parse_mass(&point.mass, &field("mass"))?,
                input::parse_density(&point.density, &field("density"))?,
                input::parse_temperature(&point.temperature, &field("temperature"))?,
                point.basis.into(),
            ))
        })
        .collect::<Result<Vec<_>, input::InputError>>()?;

    let product: Product = route.product.into();
    let trip = calculate_trip(&points, product);

    if json {
        let record = TripRecord::from_result(&trip);
        println!("{}", to_json(&record)?);
        return Ok(());
    }

    print_trip(&trip, product);
    Ok(())
}

fn print_trip(trip: &TripResult, product: Product) {
    println!("Route: {} points, {}", trip.points.len(), product.label());

    for point in &trip.points {
        let name = if point.name.is_empty() { "(unnamed)" } else { point.name.as_str() };
        println!("\n{name}");
        println!("  Mass:            {} kg", format_mass(point.mass_kg()));
        println!("  Temperature:     {} °C", format_temperature(point.temperature_c()));
        println!("  Density at 15:   {} kg/l", format_density(point.density15_kg_l()));
        println!("  Density at T:    {} kg/l", format_density(point.density_at_t_kg_l()));
        println!("  Volume at 15:    {} l", format_volume(point.v15_l()));
        println!("  Volume at T:     {} l", format_volume(point.v_fact_l()));
    }

    for segment in &trip.segments {
        println!("\nSegment {} -> {}:", segment.from.name, segment.to.name);
        print_delta(&segment.delta);
    }

    println!(
        "\nTotal ({} -> {}):",
        trip.departure().name,
        trip.arrival().name
    );
    print_delta(&trip.total);
}

fn print_delta(delta: &TripDelta) {
    println!(
        "  Mass:            {} kg ({}%)",
        format_mass(delta.mass_kg),
        format_percent(delta.mass_percent)
    );
    println!(
        "  Volume at 15:    {} l ({}%)",
        format_volume(delta.v15_l),
        format_percent(delta.v15_percent)
    );
    println!(
        "  Volume at T:     {} l ({}%)",
        format_volume(delta.v_fact_l),
        format_percent(delta.v_fact_percent)
    );
}
