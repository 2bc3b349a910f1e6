use super::legend::LegendRow;
use crate::model::Constellations;
use yew::prelude::*;

const CLAIMED: &str = "#ffe9a8";
const UNCLAIMED: &str = "#5b6478";

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub name: String,
    pub team: String,
    pub claimed: usize,
    pub total: usize,
}

pub fn legend_entries(catalogue: &Constellations) -> Vec<LegendEntry> {
    catalogue
        .iter()
        .map(|(name, c)| LegendEntry {
            name: name.clone(),
            team: c.team.clone(),
            claimed: c.claimed_count(),
            total: c.stars.len(),
        })
        .collect()
}

#[derive(Properties, PartialEq, Clone)]
pub struct LegendPanelProps {
    pub entries: Vec<LegendEntry>,
    /// Constellation of the star under the pointer, if any.
    #[prop_or_default]
    pub highlight: Option<String>,
}

#[function_component]
pub fn LegendPanel(props: &LegendPanelProps) -> Html {
    if props.entries.is_empty() {
        return html! {};
    }
    html! {<div style="position:absolute; right:12px; bottom:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; min-width:190px; max-height:40vh; overflow-y:auto;">
        <div style="font-weight:600; margin-bottom:4px;">{"Constellations"}</div>
        { for props.entries.iter().map(|e| {
            let label = if e.team.is_empty() { e.name.clone() } else { format!("{} · {}", e.name, e.team) };
            html! { <LegendRow
                color={if e.claimed > 0 { CLAIMED } else { UNCLAIMED }}
                label={label}
                detail={format!("{}/{}", e.claimed, e.total)}
                highlight={props.highlight.as_deref() == Some(e.name.as_str())}
            /> }
        }) }
    </div>}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Constellation, Star};

    #[test]
    fn test_entries_count_claimed_stars() {
        let mut c = Constellation {
            team: "core".into(),
            ..Default::default()
        };
        c.stars.insert("A".into(), Star { clickable: true, ..Default::default() });
        c.stars.insert("B".into(), Star::default());
        let mut cat = Constellations::new();
        cat.insert("Orion".into(), c);
        cat.insert("Lyra".into(), Constellation::default());
        let entries = legend_entries(&cat);
        assert_eq!(entries[0].name, "Lyra");
        assert_eq!((entries[0].claimed, entries[0].total), (0, 0));
        assert_eq!(entries[1].team, "core");
        assert_eq!((entries[1].claimed, entries[1].total), (1, 2));
    }
}
