use anyhow::{Context, bail};
use clap::Parser;
use kerbol_system::{CelestialBody, catalog};

#[derive(Parser)]
#[command(author, version, about = "Kerbol system body inspector")]
struct Cli {
    /// Body name from the catalog (case-sensitive, e.g. Kerbin)
    #[arg(long, required_unless_present = "list")]
    body: Option<String>,

    /// List every catalog body and its parent, then exit
    #[arg(long, default_value_t = false)]
    list: bool,

    /// Print circular-orbit velocity at this altitude above the surface (m)
    #[arg(long)]
    altitude: Option<f64>,

    /// Longitude for the sidereal-time query (radians)
    #[arg(long)]
    longitude: Option<f64>,

    /// Seconds since the catalog epoch for the sidereal-time query
    #[arg(long, default_value_t = 0.0)]
    time: f64,

    /// Emit the body (and its parent chain) as YAML instead of the report
    #[arg(long, default_value_t = false)]
    yaml: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let catalog = catalog();

    if cli.list {
        for body in catalog.bodies() {
            match body.parent() {
                Some(parent) => println!("{:<14} orbits {}", body.name, parent.name),
                None => println!("{:<14} (root star)", body.name),
            }
        }
        return Ok(());
    }

    let name = cli.body.as_deref().unwrap_or_default();
    let Some(body) = catalog.get(name) else {
        bail!(
            "unknown body `{name}`; run with --list to see the {} catalog names",
            catalog.len()
        );
    };

    if cli.yaml {
        print!("{}", serde_yaml::to_string(body.as_ref())?);
    } else {
        print_body(body);
    }

    if let Some(altitude_m) = cli.altitude {
        let velocity = body
            .circular_orbit_velocity(altitude_m)
            .with_context(|| format!("circular orbit at {altitude_m} m around {}", body.name))?;
        println!("circular orbit velocity at {altitude_m} m: {velocity:.3} m/s");
    }

    if let Some(longitude_rad) = cli.longitude {
        let lst = body
            .sidereal_time_at(longitude_rad, cli.time)
            .with_context(|| format!("sidereal time at {} for {}", cli.time, body.name))?;
        println!("local sidereal time at lon {longitude_rad} rad, t {} s: {lst:.9} rad", cli.time);
    }

    Ok(())
}

fn print_body(body: &CelestialBody) {
    println!("{}", body.name);
    println!("  mass:                    {:e} kg", body.mass_kg);
    println!("  radius:                  {} m", body.radius_m);
    println!("  sidereal rotation:       {} s", body.sidereal_rotation_s);
    println!("  gravitational parameter: {:e} m^3/s^2", body.gravitational_parameter_m3_s2);
    if let Some(soi) = body.sphere_of_influence_m {
        println!("  sphere of influence:     {soi:.1} m");
    }
    if let Some(orbit) = &body.orbit {
        println!("  orbit around {}:", orbit.reference_body.name);
        println!("    semi-major axis:   {} m", orbit.semi_major_axis_m);
        println!("    eccentricity:      {}", orbit.eccentricity);
        println!("    inclination:       {} deg", orbit.inclination_deg);
        println!("    asc. node long.:   {} deg", orbit.longitude_of_ascending_node_deg);
        println!("    arg. of periapsis: {} deg", orbit.argument_of_periapsis_deg);
        println!("    mean anomaly:      {} rad", orbit.mean_anomaly_at_epoch_rad);
    }
}
