//! Visual theming for the particle background.
//!
//! Holds the particle palette, the backdrop gradient and the connection line
//! style. Everything here is presentation; physics lives in
//! [`SimulationSettings`](super::settings::SimulationSettings).

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha, 0.0 to 1.0.
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with explicit alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same color, different alpha.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// `rgba(r, g, b, a)` string for canvas styles.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Fixed set of particle colors. A particle picks one at creation and keeps it.
#[derive(Clone, Debug)]
pub struct ParticlePalette {
	/// Candidate colors, picked uniformly.
	pub colors: Vec<Color>,
}

impl ParticlePalette {
	/// Neon palette: six semi-transparent accents over a dark backdrop (default)
	pub fn neon() -> Self {
		Self {
			colors: vec![
				Color::rgba(0, 255, 255, 0.7),   // Cyan
				Color::rgba(255, 20, 147, 0.6),  // Deep pink
				Color::rgba(138, 43, 226, 0.7),  // Blue violet
				Color::rgba(255, 215, 0, 0.5),   // Gold
				Color::rgba(50, 205, 50, 0.6),   // Lime green
				Color::rgba(255, 69, 0, 0.6),    // Red orange
			],
		}
	}

	/// Number of colors.
	pub fn len(&self) -> usize {
		self.colors.len()
	}

	/// True if there are no colors.
	pub fn is_empty(&self) -> bool {
		self.colors.is_empty()
	}

	/// Picks a color uniformly at random. An empty palette falls back to white.
	pub fn pick(&self, rng: &mut fastrand::Rng) -> Color {
		if self.colors.is_empty() {
			return Color::rgb(255, 255, 255);
		}
		self.colors[rng.usize(..self.colors.len())]
	}
}

/// One stop of the backdrop gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
	/// Offset along the gradient line, 0.0 to 1.0.
	pub offset: f64,
	/// Color at `offset`.
	pub color: Color,
}

/// Backdrop fill painted at the start of every frame.
///
/// The gradient runs from the top-left corner of the surface to the
/// bottom-right corner.
#[derive(Clone, Debug)]
pub struct BackgroundStyle {
	/// Stops in increasing offset order.
	pub stops: Vec<GradientStop>,
}

impl BackgroundStyle {
	/// Deep navy through dark purple and dark teal to near black.
	pub fn night() -> Self {
		Self {
			stops: vec![
				GradientStop {
					offset: 0.0,
					color: Color::rgb(10, 10, 15), // Deep navy
				},
				GradientStop {
					offset: 0.3,
					color: Color::rgb(26, 22, 37), // Dark purple
				},
				GradientStop {
					offset: 0.7,
					color: Color::rgb(15, 20, 25), // Dark teal
				},
				GradientStop {
					offset: 1.0,
					color: Color::rgb(13, 17, 23), // Rich black
				},
			],
		}
	}
}

/// Connection line style. Alpha is computed per line from distance.
#[derive(Clone, Debug)]
pub struct ConnectionStyle {
	/// Base color. Its alpha is replaced per line.
	pub color: Color,
	/// Stroke width in pixels.
	pub line_width: f64,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	/// Human-readable theme name.
	pub name: &'static str,
	/// Backdrop gradient.
	pub background: BackgroundStyle,
	/// Connection line style.
	pub connection: ConnectionStyle,
	/// Particle colors.
	pub palette: ParticlePalette,
}

impl Theme {
	/// Dark gradient with neon particles and teal connections (default)
	pub fn neon_night() -> Self {
		Self {
			name: "neon_night",
			background: BackgroundStyle::night(),
			connection: ConnectionStyle {
				color: Color::rgb(100, 255, 218),
				line_width: 0.5,
			},
			palette: ParticlePalette::neon(),
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::neon_night()
	}
}
