// src/components/publisher_list.rs
use crate::dashboard_data::Publisher;
use gloo::utils::document;
use vgsales_ui::truncation::toggle_by_id;
use vgsales_ui::ui_config::UiConfig;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PublisherListProps {
    pub publishers: Vec<Publisher>,
    pub config: UiConfig,
}

#[function_component(PublisherList)]
pub fn publisher_list(props: &PublisherListProps) -> Html {
    let config = &props.config;

    html! {
        <section class="publishers">
            {for props.publishers.iter().enumerate().map(|(index, publisher)| {
                let (list_id, button_id) = Publisher::list_ids(index);

                // The class list and label are owned by the toggle from here on,
                // so the vdom only sets their initial values.
                let list_class = classes!("game-list", config.truncated_class.clone());
                let onclick = {
                    let list_id = list_id.clone();
                    let button_id = button_id.clone();
                    let config = config.clone();
                    Callback::from(move |_: MouseEvent| {
                        if let Err(e) = toggle_by_id(&document(), &list_id, &button_id, &config) {
                            log::error!("Show more failed: {}", e);
                        }
                    })
                };

                html! {
                    <article class="publisher">
                        <h3>{publisher.name.clone()}</h3>
                        <ul id={list_id} class={list_class}>
                            {for publisher.games.iter().map(|game| {
                                html! { <li>{game.clone()}</li> }
                            })}
                        </ul>
                        <button id={button_id} {onclick}>{config.show_more_label.clone()}</button>
                    </article>
                }
            })}
        </section>
    }
}
