//! Effects rack: effect tabs, bypass toggle and one knob per parameter

use iced::widget::{button, column, row, text, Row, Space};
use iced::{Center, Element, Fill};
use soundforge_core::effect::{EffectKind, EffectParam, EffectsRack};
use soundforge_widgets::{theme, Knob};

use super::app::Message;

/// Value text with a sensible precision for the unit's range
fn format_value(value: f32, unit: &str) -> String {
    if value.abs() < 10.0 && value.fract() != 0.0 {
        format!("{value:.1}{unit}")
    } else {
        format!("{value:.0}{unit}")
    }
}

pub fn effects_panel<'a>(
    rack: &'a EffectsRack,
    selected: EffectKind,
    knobs: &'a [(EffectParam, Knob)],
) -> Element<'a, Message> {
    let tabs = rack.effects().iter().fold(Row::new().spacing(2), |tabs, effect| {
        let kind = effect.kind();
        let marker = if effect.is_enabled() { "● " } else { "○ " };
        let style = if kind == selected { button::primary } else { button::secondary };
        tabs.push(
            button(text(format!("{marker}{}", kind.name())).size(11))
                .style(style)
                .on_press(Message::SelectEffect(kind)),
        )
    });

    let Some(effect) = rack.effect(selected) else {
        return column![tabs].into();
    };

    let header = row![
        text(selected.name()).size(16),
        Space::new().width(Fill),
        button(text(if effect.is_enabled() { "Enabled" } else { "Bypassed" }).size(12))
            .style(if effect.is_enabled() { button::success } else { button::secondary })
            .on_press(Message::ToggleEffect(selected)),
        button(text("Reset").size(12)).on_press(Message::ResetEffect(selected)),
    ]
    .spacing(6)
    .align_y(Center);

    let knob_row = knobs.iter().enumerate().fold(Row::new().spacing(14), |knob_row, (index, (param, knob))| {
        let unit = selected.spec(*param).map_or("", |spec| spec.unit);
        knob_row.push(
            column![
                knob.view(move |event| Message::EffectKnob(index, event)),
                text(param.name()).size(10).color(theme::LABEL),
                text(format_value(knob.value(), unit)).size(11).color(theme::VALUE_TEXT),
            ]
            .spacing(2)
            .align_x(Center),
        )
    });

    column![tabs, header, knob_row.wrap()].spacing(8).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(2.5, "Hz"), "2.5Hz");
        assert_eq!(format_value(250.0, "ms"), "250ms");
        assert_eq!(format_value(-12.0, "dB"), "-12dB");
        assert_eq!(format_value(4.0, ":1"), "4:1");
    }
}
