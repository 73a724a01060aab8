use yew::prelude::*;

use crate::catalog::FeatureItem;

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub item: &'static FeatureItem,
    pub on_select: Callback<&'static str>,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    let FeatureCardProps { item, on_select } = props;

    let onclick = {
        let on_select = on_select.clone();
        let id = item.id;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_select.emit(id);
        })
    };

    html! {
        <button class="feature-card" {onclick} data-hover="true">
            <img class="feature-card-image" src={item.image} alt={item.name} loading="lazy" />
            <div class="feature-card-shade"></div>
            <div class="feature-card-body">
                <span class="feature-card-tag">{item.tag}</span>
                <h3 class="feature-card-name">{item.name}</h3>
                <p class="feature-card-category">{item.category}</p>
            </div>
            <span class="feature-card-arrow">{"↗"}</span>
        </button>
    }
}
