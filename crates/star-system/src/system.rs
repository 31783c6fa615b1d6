//! The body arena of one star system.
//!
//! Bodies live in a flat vector addressed by [`BodyIndex`]; parent and child
//! links are indices, so dropping the system drops the whole tree at once.
//! Traversals use explicit stacks and return index lists in the order the
//! generation passes need.

use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use units::Fixed;

use crate::body::{Body, BodyIndex};
use crate::economy::{Commodity, SystemEconomy};
use crate::error::SystemError;
use crate::metadata::SystemMetadata;
use crate::path::SystemPath;

/// A generated star system.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarSystem {
    pub metadata: SystemMetadata,
    /// Seed the root body was drawn with.
    pub seed: u32,
    pub unexplored: bool,
    pub faction: Option<String>,
    pub economy: SystemEconomy,
    bodies: Vec<Body>,
    stars: Vec<BodyIndex>,
    space_stations: Vec<BodyIndex>,
}

impl StarSystem {
    /// A system holding only its root body at index 0.
    pub fn new(metadata: SystemMetadata, seed: u32, mut root: Body) -> Self {
        let path = metadata.path.system_only();
        root.index = BodyIndex::ROOT;
        root.path = path.with_body(0);
        root.parent = None;
        root.children.clear();

        Self {
            metadata,
            seed,
            unexplored: false,
            faction: None,
            economy: SystemEconomy::default(),
            bodies: vec![root],
            stars: Vec::new(),
            space_stations: Vec::new(),
        }
    }

    pub fn path(&self) -> SystemPath {
        self.metadata.path
    }

    pub fn name(&self) -> String {
        self.metadata.display_name()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Never true: the root always exists.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn root(&self) -> &Body {
        &self.bodies[0]
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn get(&self, index: BodyIndex) -> Option<&Body> {
        self.bodies.get(index.as_usize())
    }

    pub fn body(&self, index: BodyIndex) -> Result<&Body, SystemError> {
        let len = self.bodies.len();
        self.bodies
            .get(index.as_usize())
            .ok_or(SystemError::BodyOutOfRange { index: index.0, len })
    }

    pub fn body_mut(&mut self, index: BodyIndex) -> Result<&mut Body, SystemError> {
        let len = self.bodies.len();
        self.bodies
            .get_mut(index.as_usize())
            .ok_or(SystemError::BodyOutOfRange { index: index.0, len })
    }

    /// Resolve a body path against this system.
    pub fn body_by_path(&self, path: &SystemPath) -> Result<&Body, SystemError> {
        if !path.is_same_system(&self.path()) {
            return Err(SystemError::ForeignPath {
                path: *path,
                system: self.path(),
            });
        }
        let index = path.body_index.ok_or(SystemError::NotABodyPath { path: *path })?;
        self.body(BodyIndex(index))
    }

    /// Append `body` as the last child of `parent`.
    pub fn add_child(&mut self, parent: BodyIndex, body: Body) -> Result<BodyIndex, SystemError> {
        self.insert_child(parent, body, false)
    }

    /// Insert `body` as the first child of `parent`.
    pub fn add_child_front(&mut self, parent: BodyIndex, body: Body) -> Result<BodyIndex, SystemError> {
        self.insert_child(parent, body, true)
    }

    fn insert_child(&mut self, parent: BodyIndex, mut body: Body, front: bool) -> Result<BodyIndex, SystemError> {
        self.body(parent)?;
        let index = BodyIndex(self.bodies.len() as u32);
        body.index = index;
        body.path = self.path().with_body(index.0);
        body.parent = Some(parent);
        body.children.clear();
        let is_starport = body.is_starport();
        self.bodies.push(body);

        let children = &mut self.bodies[parent.as_usize()].children;
        if front {
            children.insert(0, index);
        } else {
            children.push(index);
        }
        if is_starport {
            self.space_stations.push(index);
        }
        Ok(index)
    }

    /// Record `index` as one of the system's stars.
    pub fn mark_star(&mut self, index: BodyIndex) -> Result<(), SystemError> {
        self.body(index)?;
        if !self.stars.contains(&index) {
            self.stars.push(index);
        }
        Ok(())
    }

    /// The real stars, in creation order. Brown dwarfs that formed in a
    /// planetary disc are not listed.
    pub fn stars(&self) -> &[BodyIndex] {
        &self.stars
    }

    pub fn space_stations(&self) -> &[BodyIndex] {
        &self.space_stations
    }

    /// Parents before children, siblings in child order.
    pub fn top_down(&self) -> Vec<BodyIndex> {
        self.top_down_with_depth().into_iter().map(|(index, _)| index).collect()
    }

    fn top_down_with_depth(&self) -> Vec<(BodyIndex, usize)> {
        let mut order = Vec::with_capacity(self.bodies.len());
        let mut stack = vec![(BodyIndex::ROOT, 0)];
        while let Some((index, depth)) = stack.pop() {
            order.push((index, depth));
            for child in self.bodies[index.as_usize()].children.iter().rev() {
                stack.push((*child, depth + 1));
            }
        }
        order
    }

    /// Children before parents, siblings in child order.
    pub fn bottom_up(&self) -> Vec<BodyIndex> {
        let mut order = Vec::with_capacity(self.bodies.len());
        let mut stack = vec![(BodyIndex::ROOT, false)];
        while let Some((index, expanded)) = stack.pop() {
            if expanded {
                order.push(index);
                continue;
            }
            stack.push((index, true));
            for child in self.bodies[index.as_usize()].children.iter().rev() {
                stack.push((*child, false));
            }
        }
        order
    }

    /// `index` followed by each of its ancestors up to the root.
    pub fn path_to_root(&self, index: BodyIndex) -> Result<Vec<BodyIndex>, SystemError> {
        let mut path = Vec::new();
        let mut current = Some(index);
        while let Some(i) = current {
            path.push(i);
            current = self.body(i)?.parent;
            if path.len() > self.bodies.len() {
                break;
            }
        }
        Ok(path)
    }

    pub fn is_ancestor_of(&self, ancestor: BodyIndex, index: BodyIndex) -> Result<bool, SystemError> {
        Ok(self.path_to_root(index)?.iter().skip(1).any(|i| *i == ancestor))
    }

    /// The other child of the gravity point `index` orbits.
    pub fn co_orbital_sibling(&self, index: BodyIndex) -> Result<BodyIndex, SystemError> {
        let parent_index = self
            .body(index)?
            .parent
            .ok_or(SystemError::NotCoOrbital { index: index.0 })?;
        let parent = self.body(parent_index)?;
        if !parent.is_gravpoint() {
            return Err(SystemError::NotCoOrbital { index: index.0 });
        }
        match parent.children.as_slice() {
            [a, b] if *a == index => Ok(*b),
            [a, b] if *b == index => Ok(*a),
            children => Err(SystemError::MalformedGravityPoint {
                index: parent_index.0,
                children: children.len(),
            }),
        }
    }

    /// True when `index` is one half of a gravity-point pair.
    pub fn is_co_orbital(&self, index: BodyIndex) -> Result<bool, SystemError> {
        let Some(parent) = self.body(index)?.parent else {
            return Ok(false);
        };
        if !self.body(parent)?.is_gravpoint() {
            return Ok(false);
        }
        self.co_orbital_sibling(index).map(|_| true)
    }

    /// True when `a` and `b` are the two halves of the same pair.
    pub fn is_co_orbital_with(&self, a: BodyIndex, b: BodyIndex) -> Result<bool, SystemError> {
        if !self.is_co_orbital(a)? {
            return Ok(false);
        }
        Ok(self.co_orbital_sibling(a)? == b)
    }

    /// Hill radius of `index` around its parent, in AU. Zero for the root,
    /// stars and gravity points.
    pub fn hill_radius(&self, index: BodyIndex) -> Result<Fixed, SystemError> {
        let body = self.body(index)?;
        let Some(parent) = body.parent else {
            return Ok(Fixed::ZERO);
        };
        let parent_mass = self.body(parent)?.mass_in_earths();
        Ok(planetary::hill_radius(
            body.super_type(),
            body.semi_major_axis,
            body.eccentricity,
            body.mass,
            parent_mass,
        ))
    }

    /// Largest apoapsis among the children of `index`, in AU.
    pub fn max_child_orbital_distance(&self, index: BodyIndex) -> Result<Fixed, SystemError> {
        let body = self.body(index)?;
        let mut max = Fixed::ZERO;
        for child in &body.children {
            max = max.max(self.body(*child)?.orb_max);
        }
        Ok(max)
    }

    /// Mass of the heaviest star, in solar masses.
    pub fn max_star_mass(&self) -> Fixed {
        self.stars
            .iter()
            .filter_map(|i| self.get(*i))
            .map(|star| star.mass)
            .max()
            .unwrap_or(Fixed::ZERO)
    }

    pub fn total_population(&self) -> Fixed {
        self.economy.total_population
    }

    pub fn trade_level(&self, commodity: Commodity) -> i32 {
        self.economy.trade_levels.get(commodity)
    }

    /// Check the tree invariants: contiguous indices, consistent parent and
    /// child links, every body reachable exactly once from the root and
    /// every gravity point with exactly two children.
    pub fn validate(&self) -> Result<(), SystemError> {
        let len = self.bodies.len();
        let mut seen = vec![false; len];
        let mut stack = vec![BodyIndex::ROOT];

        while let Some(index) = stack.pop() {
            let body = self.body(index)?;
            if body.index != index {
                return Err(SystemError::BrokenLink { index: index.0 });
            }
            if std::mem::replace(&mut seen[index.as_usize()], true) {
                return Err(SystemError::BrokenLink { index: index.0 });
            }
            if body.is_gravpoint() && body.children.len() != 2 {
                return Err(SystemError::MalformedGravityPoint {
                    index: index.0,
                    children: body.children.len(),
                });
            }
            for child in &body.children {
                if self.body(*child)?.parent != Some(index) {
                    return Err(SystemError::BrokenLink { index: child.0 });
                }
                stack.push(*child);
            }
        }

        match seen.iter().position(|visited| !visited) {
            Some(orphan) => Err(SystemError::BrokenLink { index: orphan as u32 }),
            None => Ok(()),
        }
    }

    /// Write a deterministic text dump of the system, one block per body in
    /// top-down order.
    pub fn dump<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let economy = &self.economy;
        writeln!(out, "System {} \"{}\"", self.path(), self.name())?;
        writeln!(out, "  id {}", self.metadata.id)?;
        writeln!(out, "  seed {}", self.seed)?;
        writeln!(out, "  unexplored {}", self.unexplored)?;
        writeln!(out, "  faction {}", self.faction.as_deref().unwrap_or("NONE"))?;
        writeln!(out, "  econ type {}", economy.econ_type)?;
        writeln!(
            out,
            "  industrial {} agricultural {} metallicity {} human proximity {}",
            economy.industrial, economy.agricultural, economy.metallicity, economy.human_proximity
        )?;
        writeln!(out, "  population {}", economy.total_population)?;
        writeln!(out, "  {} bodies, {} stars, {} stations", self.len(), self.stars.len(), self.space_stations.len())?;
        writeln!(out, "  trade levels:")?;
        for (commodity, level) in economy.trade_levels.iter() {
            writeln!(out, "    {} {}", commodity, level)?;
        }

        for (index, depth) in self.top_down_with_depth() {
            let body = &self.bodies[index.as_usize()];
            let pad = "  ".repeat(depth + 1);
            writeln!(out, "{}{} \"{}\" {} seed {}", pad, body.path, body.name, body.body_type, body.seed)?;
            if let Some(class) = body.body_type.spectral_designation() {
                writeln!(out, "{}  class {}", pad, class)?;
            }
            writeln!(out, "{}  mass {} radius {}", pad, body.mass, body.radius)?;
            writeln!(
                out,
                "{}  a {} e {} orbit [{}, {}] incl {} offset {} phase {}",
                pad,
                body.semi_major_axis,
                body.eccentricity,
                body.orb_min,
                body.orb_max,
                body.inclination,
                body.orbital_offset,
                body.orbital_phase_at_start
            )?;
            writeln!(
                out,
                "{}  tilt {} rotation {} temp {}K",
                pad, body.axial_tilt, body.rotation_period, body.average_temp
            )?;
            if body.is_planet() {
                writeln!(
                    out,
                    "{}  metallicity {} volcanicity {} volatiles {}/{}/{} oxidizing {} life {}",
                    pad,
                    body.metallicity,
                    body.volcanicity,
                    body.volatiles.gas,
                    body.volatiles.liquid,
                    body.volatiles.ices,
                    body.atmosphere_oxidizing,
                    body.life
                )?;
                if body.rings.exists() {
                    writeln!(out, "{}  rings {} to {}", pad, body.rings.min_radius, body.rings.max_radius)?;
                }
            }
            if body.population > Fixed::ZERO || body.is_starport() {
                writeln!(
                    out,
                    "{}  population {} agricultural {} activity {}",
                    pad, body.population, body.agricultural, body.human_activity
                )?;
            }
        }
        Ok(())
    }
}
