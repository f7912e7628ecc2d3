// src/main.rs
mod components;
mod dashboard_data;

use components::chart_gallery::ChartGallery;
use components::publisher_list::PublisherList;
use dashboard_data::DashboardData;
use gloo::utils::{document, window};
use vgsales_ui::page::PageBindings;
use vgsales_ui::ui_config::UiConfig;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub enum Section {
    Statistics,
    Publishers,
}

pub enum AppMsg {
    ShowSection(Section),
}

pub struct App {
    data: Result<DashboardData, String>,
    section: Section,
    config: UiConfig,
    bindings: Option<PageBindings>,
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let data = DashboardData::bundled();
        if let Err(e) = &data {
            log::error!("{}", e);
        }

        Self {
            data,
            section: Section::Statistics,
            config: UiConfig::default(),
            bindings: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::ShowSection(section) => {
                let changed = self.section != section;
                self.section = section;
                changed
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        // The thumbnails are new nodes after every render; rebind from scratch.
        self.bindings = None;
        match PageBindings::install(&window(), &document(), self.config.clone()) {
            Ok(bindings) => self.bindings = Some(bindings),
            Err(e) => log::error!("Failed to bind page interactions: {}", e),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let tab = |section: Section, label: &str| {
            let onclick = ctx.link().callback(move |_: MouseEvent| AppMsg::ShowSection(section));
            let class = classes!("tab", (self.section == section).then_some("active"));
            html! { <button {class} {onclick}>{label.to_string()}</button> }
        };

        let body = match &self.data {
            Err(e) => html! { <div class="error">{e.clone()}</div> },
            Ok(data) => match self.section {
                Section::Statistics => html! {
                    <ChartGallery charts={data.charts.clone()} config={self.config.clone()} />
                },
                Section::Publishers => html! {
                    <PublisherList
                        publishers={data.publishers.clone()}
                        config={self.config.clone()}
                    />
                },
            },
        };

        html! {
            <div class="app-container">
                <header class="app-header">
                    <h1>{"Ventas de videojuegos"}</h1>
                    <nav>
                        {tab(Section::Statistics, "Estadísticas")}
                        {tab(Section::Publishers, "Empresas")}
                    </nav>
                </header>
                <main class="app-main">{body}</main>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
