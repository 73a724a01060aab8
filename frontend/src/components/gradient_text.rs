use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GradientTextProps {
    pub text: AttrValue,
    #[prop_or(AttrValue::Static("span"))]
    pub tag: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Text painted with the amber to pink sweep. Styles live with the hero.
#[function_component(GradientText)]
pub fn gradient_text(props: &GradientTextProps) -> Html {
    html! {
        <@{props.tag.to_string()} class={classes!("gradient-text", props.class.clone())}>
            {&props.text}
        </@>
    }
}
