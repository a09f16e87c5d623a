//! Dual-thumb range slider widget.
//!
//! The state machine lives in `contracts::shared::range_slider`; this file
//! only turns mouse and touch input into `press_*`/`move_to`/`release` calls
//! and renders thumb positions. Values are committed to the owner only when
//! the drag ends.

use crate::shared::format::format_range_value;
use contracts::shared::maid_filter::{Endpoint, NumericRange, RangeCategory};
use contracts::shared::range_slider::{DragState, RangeSlider, SliderCommit, SliderConfig, Thumb};
use leptos::ev;
use leptos::prelude::*;

/// Emulated mouse events follow a touch; ignore them for this long.
const TOUCH_MOUSE_GUARD_MS: f64 = 800.0;

/// Window listeners held for the duration of one drag. Dropping the capture
/// detaches them.
struct DragCapture {
    handles: Vec<WindowListenerHandle>,
}

impl Drop for DragCapture {
    fn drop(&mut self) {
        for handle in self.handles.drain(..) {
            handle.remove();
        }
    }
}

fn touch_client_x(ev: &web_sys::TouchEvent) -> Option<f64> {
    ev.touches()
        .get(0)
        .or_else(|| ev.changed_touches().get(0))
        .map(|t| t.client_x() as f64)
}

#[component]
pub fn RangeSliderInput(
    category: RangeCategory,
    /// Committed range from the filter state.
    #[prop(into)]
    range: Signal<NumericRange>,
    /// Called once per changed endpoint when a drag ends.
    on_commit: Callback<(Endpoint, f64)>,
) -> impl IntoView {
    let domain = category.default_range();
    let config = SliderConfig::new(domain.lo, domain.hi, category.step());
    let initial = range.get_untracked();
    let slider = RwSignal::new(RangeSlider::new(config, initial.lo, initial.hi));

    let track_ref = NodeRef::<leptos::html::Div>::new();
    let drag_capture = StoredValue::new_local(None::<DragCapture>);
    let last_touch_at = StoredValue::new(f64::NEG_INFINITY);

    // Outside changes (reset all, chip removed) move the thumbs unless the
    // user is holding one.
    Effect::new(move |_| {
        let r = range.get();
        let changed = slider
            .try_update_untracked(|s| s.sync(r.lo, r.hi))
            .unwrap_or(false);
        if changed {
            slider.notify();
        }
    });

    let value_at_client_x = move |client_x: f64| -> Option<f64> {
        let track = track_ref.get_untracked()?;
        let rect = track.get_bounding_client_rect();
        Some(slider.with_untracked(|s| s.value_at(client_x - rect.left(), rect.width())))
    };

    let drag_to = move |client_x: f64| {
        if let Some(value) = value_at_client_x(client_x) {
            let moved = slider
                .try_update_untracked(|s| s.move_to(value))
                .unwrap_or(false);
            if moved {
                slider.notify();
            }
        }
    };

    let finish = move || {
        let _ = drag_capture.try_set_value(None);
        let commits: Vec<SliderCommit> = slider.try_update(|s| s.release()).unwrap_or_default();
        for commit in commits {
            if let Some(endpoint) = Endpoint::from_index(commit.thumb.index()) {
                log::debug!("{} {:?} -> {}", category.label(), endpoint, commit.value);
                on_commit.run((endpoint, commit.value));
            }
        }
    };

    let begin_capture = move || {
        let handles = vec![
            window_event_listener(ev::mousemove, move |ev: web_sys::MouseEvent| {
                drag_to(ev.client_x() as f64);
            }),
            window_event_listener(ev::mouseup, move |_| finish()),
            window_event_listener(ev::touchmove, move |ev: web_sys::TouchEvent| {
                if let Some(x) = touch_client_x(&ev) {
                    drag_to(x);
                }
            }),
            window_event_listener(ev::touchend, move |_| finish()),
        ];
        // replacing an older capture detaches its listeners
        drag_capture.set_value(Some(DragCapture { handles }));
    };

    let press_thumb = move |thumb: Thumb| {
        slider.update(|s| s.press_thumb(thumb));
        begin_capture();
    };

    let press_track = move |client_x: f64| {
        if let Some(value) = value_at_client_x(client_x) {
            slider.update(|s| {
                s.press_track(value);
            });
            begin_capture();
        }
    };

    let is_emulated_mouse = move || {
        js_sys::Date::now() - last_touch_at.get_value() < TOUCH_MOUSE_GUARD_MS
    };

    on_cleanup(move || {
        // unmount mid-drag: detach without committing
        drop(drag_capture.try_update_value(Option::take));
    });

    let thumb_view = move |thumb: Thumb| {
        let class = match thumb {
            Thumb::Lo => "range-slider__thumb range-slider__thumb--lo",
            Thumb::Hi => "range-slider__thumb range-slider__thumb--hi",
        };
        view! {
            <div
                class=move || {
                    if slider.with(|s| s.drag_state()) == DragState::Dragging(thumb) {
                        format!("{} range-slider__thumb--active", class)
                    } else {
                        class.to_string()
                    }
                }
                role="slider"
                aria-valuemin=config.min.to_string()
                aria-valuemax=config.max.to_string()
                aria-valuenow=move || slider.with(|s| s.value(thumb)).to_string()
                style=move || format!("left: {}%;", slider.with(|s| s.position_percent(thumb)))
                on:mousedown=move |ev: ev::MouseEvent| {
                    if is_emulated_mouse() {
                        return;
                    }
                    ev.prevent_default();
                    ev.stop_propagation();
                    press_thumb(thumb);
                }
                on:touchstart=move |ev: ev::TouchEvent| {
                    ev.stop_propagation();
                    last_touch_at.set_value(js_sys::Date::now());
                    press_thumb(thumb);
                }
            ></div>
        }
    };

    view! {
        <div class="range-slider">
            <div class="range-slider__header">
                <span class="range-slider__label">{category.label()}</span>
                <span class="range-slider__values">
                    {move || {
                        let (lo, hi) = slider.with(|s| s.local());
                        format!(
                            "{} – {}",
                            format_range_value(category, lo),
                            format_range_value(category, hi)
                        )
                    }}
                </span>
            </div>
            <div
                class="range-slider__track"
                style="touch-action: none;"
                node_ref=track_ref
                on:mousedown=move |ev: ev::MouseEvent| {
                    if is_emulated_mouse() {
                        return;
                    }
                    ev.prevent_default();
                    press_track(ev.client_x() as f64);
                }
                on:touchstart=move |ev: ev::TouchEvent| {
                    last_touch_at.set_value(js_sys::Date::now());
                    if let Some(x) = touch_client_x(&ev) {
                        press_track(x);
                    }
                }
            >
                <div
                    class="range-slider__fill"
                    style=move || {
                        let (lo, hi) = slider.with(|s| {
                            (s.position_percent(Thumb::Lo), s.position_percent(Thumb::Hi))
                        });
                        format!("left: {}%; width: {}%;", lo, hi - lo)
                    }
                ></div>
                {thumb_view(Thumb::Lo)}
                {thumb_view(Thumb::Hi)}
            </div>
        </div>
    }
}
