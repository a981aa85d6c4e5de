use cowboy_safari_core::schema::to_script_json;
use serde_json::Value;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: AttrValue,
    pub data: Value,
}

/// Inline `application/ld+json` block. The payload is emitted raw so crawlers
/// see JSON rather than HTML-escaped text.
#[function_component(StructuredData)]
pub fn structured_data(p: &Props) -> Html {
    let id = p.id.replace('"', "");
    let markup = format!(
        "<script id=\"{id}\" type=\"application/ld+json\">{}</script>",
        to_script_json(&p.data)
    );
    Html::from_html_unchecked(AttrValue::from(markup))
}
