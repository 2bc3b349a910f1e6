//! Overlay of live roster identities onto the static star catalogue.
//!
//! Stars and members are joined on a normalized email. Only stars that find a
//! member become clickable; everything else is forced back to unclickable so a
//! stale or hand-edited catalogue flag can never leak through.

use std::collections::HashMap;

use crate::model::{Constellation, Constellations, RosterMember, Star};

/// Lower-cased, trimmed email used as the join key.
pub fn normalize(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Builds the email lookup. Duplicate keys resolve to the last member in
/// roster order. Members with an empty email are not indexed.
pub fn roster_lookup(roster: &[RosterMember]) -> HashMap<String, &RosterMember> {
    let mut lookup = HashMap::with_capacity(roster.len());
    for member in roster {
        let key = normalize(&member.email);
        if key.is_empty() {
            continue;
        }
        lookup.insert(key, member);
    }
    lookup
}

/// Whether a catalogue star has been claimed by a roster member.
enum Claim<'a> {
    Unclaimed,
    Claimed(&'a RosterMember),
}

fn claim<'a>(star: &Star, lookup: &HashMap<String, &'a RosterMember>) -> Claim<'a> {
    let Some(email) = star.email.as_deref() else {
        return Claim::Unclaimed;
    };
    match lookup.get(&normalize(email)) {
        Some(member) => Claim::Claimed(member),
        None => Claim::Unclaimed,
    }
}

fn merge_star(star: &Star, lookup: &HashMap<String, &RosterMember>) -> Star {
    match claim(star, lookup) {
        Claim::Unclaimed => Star {
            clickable: false,
            ..star.clone()
        },
        Claim::Claimed(member) => Star {
            ra: star.ra,
            dec: star.dec,
            magnitude: star.magnitude,
            name: member.name.clone().or_else(|| star.name.clone()),
            avatar: member.avatar.clone().or_else(|| star.avatar.clone()),
            email: Some(member.email.trim().to_string()),
            linkedin: member.linkedin.clone().or_else(|| star.linkedin.clone()),
            designations: member
                .designations
                .clone()
                .or_else(|| star.designations.clone()),
            desc: member.bio.clone().or_else(|| star.desc.clone()),
            clickable: true,
        },
    }
}

/// Produces a new catalogue with roster identities applied.
///
/// Pure and idempotent: inputs are never mutated, and merging the result
/// against the same roster again yields an equal catalogue. Safe to call with
/// either side empty while the other is still loading.
pub fn merge(catalogue: &Constellations, roster: &[RosterMember]) -> Constellations {
    let lookup = roster_lookup(roster);
    catalogue
        .iter()
        .map(|(name, constellation)| {
            let stars = constellation
                .stars
                .iter()
                .map(|(key, star)| (key.clone(), merge_star(star, &lookup)))
                .collect();
            let merged = Constellation {
                stars,
                lines: constellation.lines.clone(),
                team: constellation.team.clone(),
            };
            (name.clone(), merged)
        })
        .collect()
}
