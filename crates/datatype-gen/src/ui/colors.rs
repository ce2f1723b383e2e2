use std::io::IsTerminal;

use clap::{
  ValueEnum,
  builder::styling::{Color as ClapColor, RgbColor, Style, Styles},
};
use comfy_table::Color as ComfyColor;
use crossterm::style::Color;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorMode {
  Always,
  Auto,
  Never,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThemeMode {
  Dark,
  Light,
  Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
  Dark,
  Light,
}

/// What a piece of terminal output is, independent of the colour it is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
  Timestamp,
  Primary,
  Accent,
  Info,
  Success,
  Label,
  Value,
}

type Rgb = (u8, u8, u8);

/// Per-role colours, indexed in `Role` declaration order.
const DARK: [Rgb; 7] = [
  (118, 166, 166),
  (191, 126, 4),
  (166, 84, 55),
  (118, 166, 166),
  (118, 166, 166),
  (217, 164, 4),
  (242, 211, 56),
];

const LIGHT: [Rgb; 7] = [
  (92, 62, 38),
  (70, 42, 25),
  (211, 99, 70),
  (40, 111, 170),
  (34, 142, 90),
  (176, 103, 66),
  (199, 146, 76),
];

#[derive(Debug, Clone, Copy)]
pub struct Colors {
  enabled: bool,
  theme: Theme,
}

impl Colors {
  pub const fn new(enabled: bool, theme: Theme) -> Self {
    Self { enabled, theme }
  }

  const fn rgb(&self, role: Role) -> Option<Rgb> {
    if !self.enabled {
      return None;
    }
    let palette = match self.theme {
      Theme::Dark => &DARK,
      Theme::Light => &LIGHT,
    };
    Some(palette[role as usize])
  }

  const fn pick(&self, role: Role) -> Color {
    match self.rgb(role) {
      Some((r, g, b)) => Color::Rgb { r, g, b },
      None => Color::Reset,
    }
  }

  pub const fn timestamp(&self) -> Color {
    self.pick(Role::Timestamp)
  }

  pub const fn primary(&self) -> Color {
    self.pick(Role::Primary)
  }

  pub const fn accent(&self) -> Color {
    self.pick(Role::Accent)
  }

  pub const fn info(&self) -> Color {
    self.pick(Role::Info)
  }

  pub const fn success(&self) -> Color {
    self.pick(Role::Success)
  }

  pub const fn label(&self) -> Color {
    self.pick(Role::Label)
  }

  pub const fn value(&self) -> Color {
    self.pick(Role::Value)
  }

  /// The colour of `role` for table cells.
  fn cell(&self, role: Role) -> ComfyColor {
    match self.rgb(role) {
      Some((r, g, b)) => ComfyColor::Rgb { r, g, b },
      None => ComfyColor::Reset,
    }
  }

  pub fn label_cell(&self) -> ComfyColor {
    self.cell(Role::Label)
  }

  pub fn primary_cell(&self) -> ComfyColor {
    self.cell(Role::Primary)
  }

  pub fn value_cell(&self) -> ComfyColor {
    self.cell(Role::Value)
  }

  pub fn info_cell(&self) -> ComfyColor {
    self.cell(Role::Info)
  }

  pub fn accent_cell(&self) -> ComfyColor {
    self.cell(Role::Accent)
  }

  const fn clap(&self, role: Role) -> Option<ClapColor> {
    match self.rgb(role) {
      Some((r, g, b)) => Some(ClapColor::Rgb(RgbColor(r, g, b))),
      None => None,
    }
  }

  /// Help output styles, always drawn with the dark palette.
  pub const fn clap_styles() -> Styles {
    let colors = Self::new(true, Theme::Dark);

    Styles::styled()
      .header(Style::new().bold().underline().fg_color(colors.clap(Role::Label)))
      .usage(Style::new().bold().fg_color(colors.clap(Role::Label)))
      .literal(Style::new().fg_color(colors.clap(Role::Success)))
      .placeholder(Style::new().fg_color(colors.clap(Role::Info)))
      .error(Style::new().bold().fg_color(colors.clap(Role::Accent)))
      .valid(Style::new().fg_color(colors.clap(Role::Success)))
      .invalid(Style::new().bold().fg_color(colors.clap(Role::Accent)))
  }
}

pub fn colors_enabled(mode: ColorMode) -> bool {
  match mode {
    ColorMode::Always => true,
    ColorMode::Never => false,
    ColorMode::Auto => std::io::stdout().is_terminal(),
  }
}

pub fn detect_theme(mode: ThemeMode) -> Theme {
  match mode {
    ThemeMode::Dark => Theme::Dark,
    ThemeMode::Light => Theme::Light,
    ThemeMode::Auto => theme_from_env(|key| std::env::var(key).ok()),
  }
}

/// Guesses the terminal background from `COLORFGBG` (`fg;bg`, light backgrounds are 8 and above),
/// falling back to the iTerm profile name.
fn theme_from_env(var: impl Fn(&str) -> Option<String>) -> Theme {
  let background = var("COLORFGBG").and_then(|value| value.rsplit(';').next().and_then(|bg| bg.parse::<u8>().ok()));
  if let Some(background) = background {
    return if background >= 8 { Theme::Light } else { Theme::Dark };
  }

  let iterm_light = var("ITERM_PROFILE").is_some_and(|profile| profile.to_lowercase().contains("light"));
  if iterm_light { Theme::Light } else { Theme::Dark }
}
