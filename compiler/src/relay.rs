//! The relay swimmer resolver.
//!
//! A relay result lists its roster as bare display names; this resolves
//! each name against the swimmer table by exact (name, club) match and
//! assigns the 1-based leg order. An unmatched name degrades to a roster
//! entry with no identity rather than discarding the relay's scoring
//! record. Two same-named teammates are genuinely indistinguishable in
//! the source data, so the first table entry wins and the match is
//! logged.

use log::warn;

use sdif_format::codes::OrderCode;

use crate::result::RelayResult;
use crate::swimmer::{Swimmer, SwimmerTable};

/// One resolved roster entry.
#[derive(Debug, Clone)]
pub struct RelayLeg {
    pub order:   OrderCode,
    pub name:    String,
    pub swimmer: Option<Swimmer>,
}

/// Resolve a relay's roster in swim order. Always yields one leg per
/// roster name (at most four, by construction of the roster).
pub fn resolve_roster(relay: &RelayResult, table: &SwimmerTable) -> Vec<RelayLeg> {
    relay
        .roster
        .iter()
        .enumerate()
        .filter_map(|(i, name)| {
            let order = match OrderCode::from_index(i) {
                Some(order) => order,
                None => return None,
            };
            let swimmer = table.find(name, &relay.team.club).cloned();
            match &swimmer {
                Some(_) if table.is_ambiguous(name, &relay.team.club) => {
                    warn!(
                        "relay {} squad {}: swimmer name {:?} is ambiguous on team {}, keeping the first match",
                        relay.event.age_band, relay.squad, name, relay.team.name
                    );
                }
                None => {
                    warn!(
                        "relay {} squad {}: no swimmer named {:?} on team {}, emitting the leg without identity",
                        relay.event.age_band, relay.squad, name, relay.team.name
                    );
                }
                Some(_) => {}
            }
            Some(RelayLeg {
                order,
                name: name.clone(),
                swimmer,
            })
        })
        .collect()
}
