use charming::{Chart, renderer::WasmRenderer};
use gloo::events::EventListener;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::Config;
use crate::models::error::AppError;
use crate::utils::{debounce::debounced_listener, palette::ChartPalette};

/// Draws a chart into the element with id `chart_id` inside the returned container ref.
///
/// `build` turns the widget's data into chart options. The chart redraws when
/// `data` changes, when the window stops resizing and when the page theme changes.
#[hook]
pub fn use_echart<D>(chart_id: AttrValue, data: D, build: fn(&D, &ChartPalette) -> Chart) -> NodeRef
where
    D: PartialEq + Clone + 'static,
{
    let container_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();

        use_effect_with(
            (data, chart_id, container_ref),
            move |(data, chart_id, container_ref)| {
                let listeners = container_ref.cast::<HtmlElement>().and_then(|container| {
                    let draw = {
                        let data = data.clone();
                        let chart_id = chart_id.clone();
                        move || {
                            if let Err(e) = render_chart(&container, &chart_id, &data, build) {
                                web_sys::console::error_1(&e.to_string().into());
                            }
                        }
                    };
                    draw();

                    let window = web_sys::window()?;
                    let on_theme = {
                        let draw = draw.clone();
                        EventListener::new(&window, Config::THEME_CHANGE_EVENT, move |_| draw())
                    };
                    let on_resize =
                        debounced_listener(&window, "resize", Config::RESIZE_DEBOUNCE_MS, draw);
                    Some((on_resize, on_theme))
                });

                move || drop(listeners)
            },
        );
    }

    container_ref
}

fn render_chart<D>(
    container: &HtmlElement,
    chart_id: &str,
    data: &D,
    build: fn(&D, &ChartPalette) -> Chart,
) -> Result<(), AppError> {
    let width = u32::try_from(container.client_width()).unwrap_or(0);
    let height = u32::try_from(container.client_height()).unwrap_or(0);

    // Hidden or collapsed container
    if width == 0 || height == 0 {
        return Ok(());
    }

    let chart = build(data, &ChartPalette::from_document());
    WasmRenderer::new(width, height)
        .render(chart_id, &chart)
        .map(|_| ())
        .map_err(|e| AppError::RenderError(format!("{chart_id}: {e:?}")))
}
