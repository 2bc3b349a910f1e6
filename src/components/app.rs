use std::rc::Rc;

use super::{profile_panel::ProfilePanel, star_map::StarMap};
use crate::config::StarMapConfig;
use crate::loader;
use crate::merge::merge;
use crate::model::{Constellations, RosterMember, SelectedStar};
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| StarMapConfig::load());
    let catalogue = use_state(|| Rc::new(Constellations::new()));
    let roster = use_state(|| Rc::new(Vec::<RosterMember>::new()));
    let selected = use_state(|| None::<SelectedStar>);

    // Catalogue and roster load independently; each arrival re-merges below.
    {
        let catalogue = catalogue.clone();
        let roster = roster.clone();
        let config = config.clone();
        use_effect_with((), move |_| {
            let url = config.catalogue_url.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match loader::load_catalogue(&url).await {
                    Ok(c) => catalogue.set(Rc::new(c)),
                    Err(e) => log::warn!("catalogue unavailable, continuing without it: {e}"),
                }
            });
            let url = config.roster_url.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match loader::load_roster(&url).await {
                    Ok(r) => roster.set(Rc::new(r)),
                    Err(e) => log::warn!("roster unavailable, no stars will be clickable: {e}"),
                }
            });
            || ()
        });
    }

    let merged = use_memo(((*catalogue).clone(), (*roster).clone()), |(c, r)| {
        let merged = merge(c, r);
        log::debug!(
            "merged {} roster members onto {} constellations",
            r.len(),
            merged.len()
        );
        merged
    });

    // Keep an open profile in sync with the latest merge
    {
        let selected = selected.clone();
        use_effect_with(merged.clone(), move |merged| {
            if let Some(sel) = &*selected {
                let fresh = sel
                    .key
                    .resolve(merged)
                    .filter(|s| s.clickable)
                    .cloned();
                match fresh {
                    Some(star) if star != sel.star => selected.set(Some(SelectedStar {
                        star,
                        ..sel.clone()
                    })),
                    Some(_) => {}
                    None => selected.set(None),
                }
            }
            || ()
        });
    }

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |s: Option<SelectedStar>| selected.set(s))
    };
    let on_close = {
        let selected = selected.clone();
        Callback::from(move |()| selected.set(None))
    };

    html! {<div style="position:fixed; inset:0; background:#05070d; color:#c9d1d9; font-family:sans-serif;">
        <StarMap catalogue={merged.clone()} config={config.clone()} on_select={on_select} />
        <ProfilePanel selected={(*selected).clone()} on_close={on_close} />
    </div>}
}
