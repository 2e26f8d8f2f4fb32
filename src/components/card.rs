use yew::prelude::*;

use crate::models::date_range::DateRange;

#[derive(Properties, PartialEq)]
pub struct CardProps {
    pub title: AttrValue,
    /// Sentence shown under the title; the date range is appended to it
    #[prop_or_default]
    pub description: AttrValue,
    pub date_range: DateRange,
    /// Controls rendered at the right of the header, e.g. the interval select
    #[prop_or_default]
    pub actions: Html,
    #[prop_or_default]
    pub footer: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

/// Shared frame for every chart widget
#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    let description = if props.description.is_empty() {
        props.date_range.display()
    } else {
        format!("{} {}", props.description, props.date_range.display())
    };

    html! {
        <div class={classes!("card", props.class.clone())}>
            <div class="card-header">
                <div class="card-heading">
                    <h3 class="card-title">{props.title.clone()}</h3>
                    <p class="card-description">{description}</p>
                </div>
                {props.actions.clone()}
            </div>
            <div class="card-content">
                {props.children.clone()}
            </div>
            if let Some(footer) = &props.footer {
                <div class="card-footer">{footer.clone()}</div>
            }
        </div>
    }
}
