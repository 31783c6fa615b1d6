//! Generation pipeline.
//!
//! Tree, physics, population, stations. A generator holds no state between
//! systems beyond its configuration, so it can be shared across threads and
//! asked for systems in any order.

use log::{debug, info};
use star_system::{StarSystem, SystemPath};

use crate::builder::{build_custom_tree, build_random_tree};
use crate::config::GeneratorConfig;
use crate::context::GenerationContext;
use crate::custom::CustomSystem;
use crate::error::GenerationError;
use crate::names::{NameOracle, SyllableNames};
use crate::physics::apply_physics;
use crate::population::populate;
use crate::stations::add_stations;

/// Produces star systems from galactic paths.
///
/// # Example
///
/// ```
/// use star_system::SystemPath;
/// use system_generator::{GeneratorConfig, SystemGenerator};
///
/// let generator = SystemGenerator::new(GeneratorConfig::default());
/// let system = generator.generate(SystemPath::new(0, 0, 0, 0)).unwrap();
/// assert!(!system.stars().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct SystemGenerator<N: NameOracle = SyllableNames> {
    config: GeneratorConfig,
    names: N,
}

impl SystemGenerator<SyllableNames> {
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_names(config, SyllableNames)
    }
}

impl<N: NameOracle> SystemGenerator<N> {
    pub fn with_names(config: GeneratorConfig, names: N) -> Self {
        Self { config, names }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn names(&self) -> &N {
        &self.names
    }

    pub fn context(&self, path: SystemPath) -> GenerationContext {
        GenerationContext::from_config(path, &self.config)
    }

    /// Generate the random system at `path`. Any body index in `path` is
    /// ignored.
    pub fn generate(&self, path: SystemPath) -> Result<StarSystem, GenerationError> {
        let ctx = self.context(path);
        let system = build_random_tree(&ctx, &self.names)?;
        debug!("{}: tree of {} bodies", ctx.path(), system.len());
        self.finish(system, &ctx, true)
    }

    /// Generate a hand-authored system at `path`. The tree and names are
    /// kept as given; physics, population and stations run as usual.
    pub fn generate_custom(&self, path: SystemPath, custom: &CustomSystem) -> Result<StarSystem, GenerationError> {
        let ctx = self.context(path);
        let system = build_custom_tree(&ctx, custom)?;
        debug!("{}: custom tree of {} bodies", ctx.path(), system.len());
        self.finish(system, &ctx, false)
    }

    fn finish(&self, mut system: StarSystem, ctx: &GenerationContext, rename: bool) -> Result<StarSystem, GenerationError> {
        apply_physics(&mut system, ctx)?;
        populate(&mut system, ctx, &self.names, rename)?;
        if self.config.add_stations {
            add_stations(&mut system, ctx, &self.config, &self.names)?;
        }
        system.validate()?;

        info!(
            "Generated {} ({}): {} bodies, {} stars, {} stations, population {}",
            system.name(),
            ctx.path(),
            system.len(),
            system.stars().len(),
            system.space_stations().len(),
            system.economy.total_population
        );
        Ok(system)
    }
}
