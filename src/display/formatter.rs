//! Markdown terminal formatting using termimad

use termimad::MadSkin;

use crate::config::ColorMode;
use crate::display::terminal::should_use_colors;

/// Print markdown with journal styling, or as plain text when colors are off
pub fn print_markdown(markdown: &str, mode: ColorMode) {
    if should_use_colors(mode) {
        let mut skin = MadSkin::default();
        customize_skin(&mut skin);
        skin.print_text(markdown);
    } else {
        println!("{}", markdown);
    }
}

fn customize_skin(skin: &mut MadSkin) {
    use termimad::crossterm::style::{Attribute, Color::*};

    // Book titles
    skin.headers[1].set_fg(Cyan);
    skin.headers[1].add_attr(Attribute::Bold);
    skin.headers[2].set_fg(Blue);

    // Field labels
    skin.bold.set_fg(Yellow);
    skin.bold.add_attr(Attribute::Bold);
    skin.italic.add_attr(Attribute::Italic);

    skin.bullet.set_fg(DarkGrey);
}
