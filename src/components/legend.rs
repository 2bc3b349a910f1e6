use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LegendRowProps {
    pub color: &'static str,
    pub label: AttrValue,
    #[prop_or_default]
    pub detail: AttrValue,
    #[prop_or(false)]
    pub highlight: bool,
}

#[function_component(LegendRow)]
pub fn legend_row(props: &LegendRowProps) -> Html {
    let weight = if props.highlight { "600" } else { "400" };
    html! { <div style={format!("display:flex; align-items:center; gap:8px; margin:3px 0; font-weight:{};", weight)}>
        <span style={format!("display:inline-block; width:10px; height:10px; background:{}; border-radius:50%;", props.color)}></span>
        <span>{ props.label.clone() }</span>
        <span style="margin-left:auto; color:#8b949e; font-size:11px;">{ props.detail.clone() }</span>
    </div> }
}
