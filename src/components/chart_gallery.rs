// src/components/chart_gallery.rs
use crate::dashboard_data::Chart;
use vgsales_ui::ui_config::UiConfig;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ChartGalleryProps {
    pub charts: Vec<Chart>,
    pub config: UiConfig,
}

/// Chart thumbnails plus the (initially hidden) fullscreen overlay they open.
/// Click handling is attached by `PageBindings` after render.
#[function_component(ChartGallery)]
pub fn chart_gallery(props: &ChartGalleryProps) -> Html {
    let config = &props.config;

    html! {
        <section class="charts">
            {for props.charts.iter().map(|chart| {
                html! {
                    <figure class={config.chart_class.clone()}>
                        <img src={chart.src.clone()} alt={chart.title.clone()} />
                        <figcaption>{chart.title.clone()}</figcaption>
                    </figure>
                }
            })}

            <div id={config.overlay_id.clone()} class="fullscreen" style="display: none;">
                <img id={config.overlay_image_id.clone()} alt="" />
            </div>
        </section>
    }
}
