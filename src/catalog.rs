//! The hand-authored registry of Kerbol system bodies.
//!
//! Bodies are constructed in parent-before-child order (the star first,
//! then planets, then moons) so that every satellite's sphere of influence
//! can be derived from an already-complete reference body. The literal
//! numbers below are the catalog's compatibility surface; consumers depend
//! on them bit for bit, so they are never rounded or reformatted.

use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

use kerbol_bodies::{BodyError, CelestialBody, Orbit};

/// The complete, read-only body registry.
///
/// One public field per body mirrors the catalog's named exports; the
/// backing map serves lookup by name. Both hold the same `Arc`s.
#[derive(Debug, Clone)]
pub struct Catalog {
    bodies: BTreeMap<Arc<str>, Arc<CelestialBody>>,

    pub kerbol: Arc<CelestialBody>,
    pub ablate: Arc<CelestialBody>,
    pub moho: Arc<CelestialBody>,
    pub eve: Arc<CelestialBody>,
    pub gilly: Arc<CelestialBody>,
    pub kerbin: Arc<CelestialBody>,
    pub mun: Arc<CelestialBody>,
    pub minimus: Arc<CelestialBody>,
    pub duna: Arc<CelestialBody>,
    pub ike: Arc<CelestialBody>,
    pub dres: Arc<CelestialBody>,
    pub jool: Arc<CelestialBody>,
    pub laythe: Arc<CelestialBody>,
    pub vall: Arc<CelestialBody>,
    pub tylo: Arc<CelestialBody>,
    pub bop: Arc<CelestialBody>,
    pub pol: Arc<CelestialBody>,
    pub eeloo: Arc<CelestialBody>,
    pub ascension: Arc<CelestialBody>,
    pub inaccessable: Arc<CelestialBody>,
    pub sentar: Arc<CelestialBody>,
    pub skelton: Arc<CelestialBody>,
    pub erin: Arc<CelestialBody>,
    pub ringle: Arc<CelestialBody>,
    pub thud: Arc<CelestialBody>,
}

impl Catalog {
    /// Construct every body of the catalog from its literal inputs.
    ///
    /// Only fails if the literal table is edited into an invalid state;
    /// a pristine table always builds.
    pub fn build() -> Result<Self, BodyError> {
        let kerbol = CelestialBody::new("Kerbol", 1.756567e28, 2.616e8, 0.0, None)?;

        let ablate = CelestialBody::new(
            "Ablate",
            8.94276895415044e18,
            13_000.0,
            159_300.265559099,
            Some(Orbit::new(kerbol.clone(), 910_000_000.0, 0.0, 5.0, 0.0, 0.0, 5.09991320798)),
        )?;
        let moho = CelestialBody::new(
            "Moho",
            3.6747079e21,
            250_000.0,
            1_210_000.0,
            Some(Orbit::new(kerbol.clone(), 5_263_138_304.0, 0.2, 7.0, 70.0, 15.0, 3.14)),
        )?;
        let eve = CelestialBody::new(
            "Eve",
            1.2244127e23,
            700_000.0,
            80_500.0,
            Some(Orbit::new(kerbol.clone(), 9_832_684_544.0, 0.01, 2.1, 15.0, 0.0, 3.14)),
        )?;
        let gilly = CelestialBody::new(
            "Gilly",
            1.2420512e17,
            13_000.0,
            28_255.0,
            Some(Orbit::new(eve.clone(), 31_500_000.0, 0.55, 12.0, 80.0, 10.0, 0.9)),
        )?;
        let kerbin = CelestialBody::new(
            "Kerbin",
            5.2915793e22,
            600_000.0,
            21_600.0,
            Some(Orbit::new(kerbol.clone(), 13_599_840_256.0, 0.0, 0.0, 0.0, 0.0, 3.14)),
        )?;
        let mun = CelestialBody::new(
            "Mun",
            9.7600236e20,
            200_000.0,
            138_984.38,
            Some(Orbit::new(kerbin.clone(), 12_000_000.0, 0.0, 0.0, 0.0, 0.0, 1.7)),
        )?;
        let minimus = CelestialBody::new(
            "Minimus",
            2.6457897e19,
            60_000.0,
            40_400.0,
            Some(Orbit::new(kerbin.clone(), 47_000_000.0, 0.0, 6.0, 78.0, 38.0, 0.9)),
        )?;
        let duna = CelestialBody::new(
            "Duna",
            4.5154812e21,
            320_000.0,
            65_517.859,
            Some(Orbit::new(kerbol.clone(), 20_726_155_264.0, 0.051, 0.06, 135.5, 0.0, 3.14)),
        )?;
        let ike = CelestialBody::new(
            "Ike",
            2.7821949e20,
            130_000.0,
            65_517.862,
            Some(Orbit::new(duna.clone(), 3_200_000.0, 0.03, 0.2, 0.0, 0.0, 1.7)),
        )?;
        let dres = CelestialBody::new(
            "Dres",
            3.2191322e20,
            138_000.0,
            34_800.0,
            Some(Orbit::new(kerbol.clone(), 40_839_348_203.0, 0.145, 5.0, 280.0, 90.0, 3.14)),
        )?;
        let jool = CelestialBody::new(
            "Jool",
            4.2332635e24,
            6_000_000.0,
            36_000.0,
            Some(Orbit::new(kerbol.clone(), 68_773_560_320.0, 0.05, 1.304, 52.0, 0.0, 0.1)),
        )?;
        let laythe = CelestialBody::new(
            "Laythe",
            2.9397663e22,
            500_000.0,
            52_980.879,
            Some(Orbit::new(jool.clone(), 27_184_000.0, 0.0, 0.0, 0.0, 0.0, 3.14)),
        )?;
        let vall = CelestialBody::new(
            "Vall",
            3.1088028e21,
            300_000.0,
            105_962.09,
            Some(Orbit::new(jool.clone(), 43_152_000.0, 0.0, 0.0, 0.0, 0.0, 0.9)),
        )?;
        let tylo = CelestialBody::new(
            "Tylo",
            4.2332635e22,
            600_000.0,
            211_926.36,
            Some(Orbit::new(jool.clone(), 68_500_000.0, 0.0, 0.025, 0.0, 0.0, 3.14)),
        )?;
        let bop = CelestialBody::new(
            "Bop",
            3.7261536e19,
            65_000.0,
            544_507.4,
            Some(Orbit::new(jool.clone(), 128_500_000.0, 0.235, 15.0, 10.0, 25.0, 0.9)),
        )?;
        let pol = CelestialBody::new(
            "Pol",
            1.0813636e19,
            44_000.0,
            901_902.62,
            Some(Orbit::new(jool.clone(), 179_890_000.0, 0.17085, 4.25, 2.0, 15.0, 0.9)),
        )?;
        let eeloo = CelestialBody::new(
            "Eeloo",
            1.1149358e21,
            210_000.0,
            19_460.0,
            Some(Orbit::new(kerbol.clone(), 90_118_820_000.0, 0.26, 6.15, 50.0, 260.0, 3.14)),
        )?;
        let ascension = CelestialBody::new(
            "Ascension",
            1.90144081510339e19,
            14_000.0,
            4_040.0,
            Some(Orbit::new(kerbol.clone(), 100_000_000_000.0, 0.97, 19.0, 0.0, 0.0, 1.827643209)),
        )?;
        // Catalog spelling, kept for name compatibility.
        let inaccessable = CelestialBody::new(
            "Inaccessable",
            3.96868444710818e18,
            15_000.0,
            440.0,
            Some(Orbit::new(kerbol.clone(), 125_000_000_000.0, 0.01, 2.0, 0.0, 0.0, 6.04892620778)),
        )?;
        let sentar = CelestialBody::new(
            "Sentar",
            5.09314680671058e23,
            6_000_000.0,
            36_000.0,
            Some(Orbit::new(kerbol.clone(), 160_000_000_000.0, 0.0, 26.0, 0.0, 0.0, 0.0)),
        )?;
        let skelton = CelestialBody::new(
            "Skelton",
            4.51548115036107e21,
            320_000.0,
            65_517.859375,
            Some(Orbit::new(sentar.clone(), 50_000_000.0, 0.0, 160.0, 0.0, 0.0, 0.0)),
        )?;
        let erin = CelestialBody::new(
            "Erin",
            2.9397663009231e22,
            500_000.0,
            21_600.0,
            Some(Orbit::new(sentar.clone(), 80_000_000.0, 0.0, 15.0, 0.0, 0.0, 0.0)),
        )?;
        let ringle = CelestialBody::new(
            "Ringle",
            4.23326347332927e22,
            600_000.0,
            491_383.972112887,
            Some(Orbit::new(sentar.clone(), 120_000_000.0, 0.0, 15.0, 0.0, 0.0, 0.0)),
        )?;
        let thud = CelestialBody::new(
            "Thud",
            1.66155588852263e23,
            600_000.0,
            1_751_403.30360751,
            Some(Orbit::new(sentar.clone(), 280_000_000.0, 0.25, 20.0, 0.0, 0.0, 0.0)),
        )?;

        let mut bodies = BTreeMap::new();
        for body in [
            &kerbol, &ablate, &moho, &eve, &gilly, &kerbin, &mun, &minimus, &duna, &ike, &dres,
            &jool, &laythe, &vall, &tylo, &bop, &pol, &eeloo, &ascension, &inaccessable, &sentar,
            &skelton, &erin, &ringle, &thud,
        ] {
            bodies.insert(body.name.clone(), body.clone());
        }

        Ok(Self {
            bodies,
            kerbol,
            ablate,
            moho,
            eve,
            gilly,
            kerbin,
            mun,
            minimus,
            duna,
            ike,
            dres,
            jool,
            laythe,
            vall,
            tylo,
            bop,
            pol,
            eeloo,
            ascension,
            inaccessable,
            sentar,
            skelton,
            erin,
            ringle,
            thud,
        })
    }

    /// Look up a body by catalog name (case-sensitive).
    pub fn get(&self, name: &str) -> Option<&Arc<CelestialBody>> {
        self.bodies.get(name)
    }

    /// The root star of the orbital tree.
    pub fn root(&self) -> &Arc<CelestialBody> {
        &self.kerbol
    }

    /// Catalog names in lexicographic order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bodies.keys().map(|name| name.as_ref())
    }

    /// All bodies, keyed iteration in lexicographic name order.
    pub fn bodies(&self) -> impl Iterator<Item = &Arc<CelestialBody>> {
        self.bodies.values()
    }

    /// Direct satellites of the named body, in lexicographic name order.
    pub fn children<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Arc<CelestialBody>> {
        self.bodies
            .values()
            .filter(move |body| body.parent().is_some_and(|parent| parent.name.as_ref() == name))
    }

    /// Number of bodies in the catalog.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Whether the catalog is empty (never, for the built-in table).
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

/// Process-wide catalog, built once on first access.
///
/// Readers after that point see a fully constructed, immutable table, so no
/// further synchronization is needed. Panics only if the literal table has
/// been edited into an invalid state.
pub fn catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(|| match Catalog::build() {
        Ok(catalog) => catalog,
        Err(err) => panic!("built-in catalog failed validation: {err}"),
    })
}
