use crate::model::SelectedStar;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ProfilePanelProps {
    pub selected: Option<SelectedStar>,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn ProfilePanel(props: &ProfilePanelProps) -> Html {
    let Some(sel) = &props.selected else {
        return html! {};
    };
    let star = &sel.star;
    let name = star.display_name(&sel.key.star).to_string();

    let panel_style = "position:absolute; right:12px; top:50%; transform:translateY(-50%); \
        background:rgba(22,27,34,0.95); border:1px solid #30363d; border-radius:8px; \
        padding:12px 16px; min-width:240px; max-width:300px; font-size:13px; color:#c9d1d9;";
    let header_style = "font-weight:600; font-size:15px; display:flex; align-items:center; gap:10px;";
    let section_style = "margin-top:10px; padding-top:8px; border-top:1px solid #30363d;";
    let muted = "color:#8b949e; font-size:12px;";
    let chip_style = "display:inline-block; margin:2px 4px 2px 0; padding:1px 6px; \
        border:1px solid #30363d; border-radius:10px; font-size:11px;";

    let close = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let avatar = match star.avatar.as_deref() {
        Some(src) if !src.is_empty() => html! {
            <img src={src.to_string()} alt={name.clone()}
                style="width:48px; height:48px; border-radius:50%; object-fit:cover;" />
        },
        _ => html! {},
    };

    let origin = if sel.team.is_empty() {
        format!("{} in {}", sel.key.star, sel.key.constellation)
    } else {
        format!("{} in {} · {}", sel.key.star, sel.key.constellation, sel.team)
    };

    let designations = match &star.designations {
        Some(d) if !d.is_empty() => html! {
            <div style="margin-top:6px;">
                { for d.iter().map(|t| html! { <span style={chip_style}>{ t.clone() }</span> }) }
            </div>
        },
        _ => html! {},
    };

    let bio = match star.desc.as_deref() {
        Some(text) if !text.trim().is_empty() => html! {
            <div style={section_style}>{ text.to_string() }</div>
        },
        _ => html! {},
    };

    let email = star.email.as_deref().filter(|e| !e.is_empty()).map(|e| {
        html! { <div><a href={format!("mailto:{e}")} style="color:#58a6ff;">{ e.to_string() }</a></div> }
    });
    let linkedin = star.linkedin.as_deref().filter(|l| !l.is_empty()).map(|l| {
        html! { <div><a href={l.to_string()} target="_blank" rel="noopener noreferrer" style="color:#58a6ff;">{"LinkedIn"}</a></div> }
    });
    let links = if email.is_some() || linkedin.is_some() {
        let email = email.unwrap_or_default();
        let linkedin = linkedin.unwrap_or_default();
        html! { <div style={section_style}>{ email }{ linkedin }</div> }
    } else {
        html! {}
    };

    html! {
        <div style={panel_style}>
            <div style={header_style}>
                { avatar }
                <div style="flex:1;">
                    <div>{ name }</div>
                    <div style={muted}>{ origin }</div>
                </div>
                <button onclick={close} title="Close">{"×"}</button>
            </div>
            { designations }
            { bio }
            { links }
        </div>
    }
}
