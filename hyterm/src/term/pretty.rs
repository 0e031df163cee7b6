//! Term printers.
//!
//! Role
//! - `Display` is the raw debug form: `#0`, `foo`, `(f a b)`, `(fun (x : A) b)`,
//!   `(pi (x : A) B)`, `(Type l)`, `42`. Deterministic, used for logs and golden tests.
//! - [`PrettyTerm`] builds an annotated `RcDoc` with the same parenthesization, colors binder
//!   keywords, and leaves line fitting to the `pretty` layout engine. Rendered without colors
//!   at an unbounded width it is byte-for-byte the `Display` output.
//!
//! Performance
//! - Building the doc is O(n) in the unfolded term size; shared subterms are printed once per
//!   occurrence.
use std::fmt;
use std::io::{self, Write};

use log::warn;
use pretty::{FmtWrite, RcDoc, RenderAnnotated};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::name::Name;
use crate::term::{Term, TermView};

/// Width at which no group ever breaks.
pub const FLAT_WIDTH: usize = i32::MAX as usize;

/// Styles used to annotate parts of the pretty-printed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Punct, // colons
    /// Parentheses are colored by nesting depth so matching pairs share a color.
    Paren(u8),
    /// The `fun` keyword.
    Lambda,
    /// The `pi` keyword.
    Pi,
    Ident,    // bound variables and binder names
    Constant, // constants
    Sort,     // Type and its level
    Literal,  // numerals
}

impl Style {
    fn to_color_spec(self) -> ColorSpec {
        let mut s = ColorSpec::new();
        match self {
            Style::Punct => {
                s.set_dimmed(true);
            }
            Style::Paren(depth) => {
                let fg = match depth % 6 {
                    0 => Color::Blue,
                    1 => Color::Green,
                    2 => Color::White,
                    3 => Color::Yellow,
                    4 => Color::Red,
                    5 => Color::Magenta,
                    _ => unreachable!(),
                };
                s.set_fg(Some(fg)).set_dimmed(true);
            }
            Style::Lambda => {
                s.set_fg(Some(Color::Magenta)).set_bold(true);
            }
            Style::Pi => {
                s.set_fg(Some(Color::Yellow)).set_bold(true);
            }
            Style::Ident => {
                s.set_fg(Some(Color::Green));
            }
            Style::Constant => {
                s.set_fg(Some(Color::Cyan));
            }
            Style::Sort => {
                s.set_fg(Some(Color::Blue)).set_bold(true);
            }
            Style::Literal => {
                s.set_fg(Some(Color::Red));
            }
        }
        s
    }
}

// ======================== Debug form =========================

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.view() {
            TermView::Var(idx) => write!(f, "#{}", idx),
            TermView::Constant { name, .. } => write!(f, "{}", name),
            TermView::App(args) => {
                f.write_str("(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                f.write_str(")")
            }
            TermView::Lambda { name, ty, body } => write!(f, "(fun ({} : {}) {})", name, ty, body),
            TermView::Pi { name, ty, body } => write!(f, "(pi ({} : {}) {})", name, ty, body),
            TermView::Type(level) => write!(f, "(Type {})", level),
            TermView::Numeral(value) => write!(f, "{}", value),
        }
    }
}

impl Term {
    /// The debug form as an owned string.
    pub fn debug_string(&self) -> String {
        self.to_string()
    }
}

// ======================== Document form =========================

fn styled(style: Style, s: impl fmt::Display) -> RcDoc<'static, Style> {
    RcDoc::as_string(s).annotate(style)
}

#[inline]
fn lparen(depth: u8) -> RcDoc<'static, Style> {
    RcDoc::as_string("(").annotate(Style::Paren(depth))
}

#[inline]
fn rparen(depth: u8) -> RcDoc<'static, Style> {
    RcDoc::as_string(")").annotate(Style::Paren(depth))
}

/// `(kw (name : ty) body)` for both binders.
fn binder_doc(
    keyword: RcDoc<'static, Style>,
    name: &Name,
    ty: &Term,
    body: &Term,
    depth: u8,
) -> RcDoc<'static, Style> {
    let inner = depth.wrapping_add(1);
    let binding = lparen(inner)
        .append(styled(Style::Ident, name))
        .append(styled(Style::Punct, " : "))
        .append(to_doc_with_depth(ty, inner.wrapping_add(1)))
        .append(rparen(inner))
        .group();

    lparen(depth)
        .append(
            keyword
                .append(RcDoc::space())
                .append(binding)
                .append(RcDoc::line())
                .append(to_doc_with_depth(body, inner))
                .nest(2)
                .group(),
        )
        .append(rparen(depth))
}

/// Depth-aware document builder that colors parentheses by nesting level.
fn to_doc_with_depth(t: &Term, depth: u8) -> RcDoc<'static, Style> {
    let inner = depth.wrapping_add(1);
    match t.view() {
        TermView::Var(idx) => styled(Style::Ident, format!("#{}", idx)),
        TermView::Constant { name, .. } => styled(Style::Constant, name),
        TermView::App(args) => lparen(depth)
            .append(
                RcDoc::intersperse(
                    args.iter().map(|arg| to_doc_with_depth(arg, inner)),
                    RcDoc::line(),
                )
                .nest(1)
                .group(),
            )
            .append(rparen(depth)),
        TermView::Lambda { name, ty, body } => {
            binder_doc(styled(Style::Lambda, "fun"), name, ty, body, depth)
        }
        TermView::Pi { name, ty, body } => binder_doc(styled(Style::Pi, "pi"), name, ty, body, depth),
        TermView::Type(level) => lparen(depth)
            .append(styled(Style::Sort, "Type"))
            .append(RcDoc::space())
            .append(styled(Style::Sort, level))
            .append(rparen(depth))
            .group(),
        TermView::Numeral(value) => styled(Style::Literal, value),
    }
}

// A writer that maps Style annotations to termcolor ColorSpec on a WriteColor sink.
struct ColorWriter<'w, W: WriteColor + Write> {
    out: &'w mut W,
}

impl<'a, 'w, W: WriteColor + Write> RenderAnnotated<'a, Style> for ColorWriter<'w, W> {
    fn push_annotation(&mut self, ann: &'a Style) -> io::Result<()> {
        self.out.set_color(&ann.to_color_spec())
    }
    fn pop_annotation(&mut self) -> io::Result<()> {
        self.out.reset()
    }
}

impl<'w, W: WriteColor + Write> pretty::Render for ColorWriter<'w, W> {
    type Error = io::Error;
    fn write_str(&mut self, s: &str) -> io::Result<usize> {
        self.out.write_all(s.as_bytes())?;
        Ok(s.len())
    }
    fn write_str_all(&mut self, s: &str) -> io::Result<()> {
        self.out.write_all(s.as_bytes())
    }
    fn fail_doc(&self) -> Self::Error {
        io::Error::other("render failed")
    }
}

/// Render a document to a `termcolor::WriteColor` with width-aware layout.
fn render_to<W: WriteColor + Write>(
    doc: &RcDoc<'_, Style>,
    width: usize,
    out: &mut W,
) -> io::Result<()> {
    let mut cw = ColorWriter { out };
    doc.render_raw(width, &mut cw)
}

/// Convenience: format to a plain string without colors.
fn to_plain_string(t: &Term, width: usize) -> String {
    let mut buf = String::new();
    // `String` sinks never fail, so an error here leaves a truncated but usable rendering.
    if let Err(err) = to_doc_with_depth(t, 0).render_fmt(width, &mut buf) {
        warn!("plain rendering of term 0x{:016x} stopped early: {}", t.hash(), err);
    }
    buf
}

/// Convenience: retrieve the width of the terminal, or 80 if it cannot be determined.
fn terminal_width() -> usize {
    term_size::dimensions().map(|(w, _)| w).unwrap_or(80)
}

// ======================== Trait impls =========================

/// Pretty-printing conveniences for terms.
pub trait PrettyTerm {
    /// Build an RcDoc representation of this term with style annotations.
    fn pretty_doc(&self) -> RcDoc<'static, Style>;

    /// Render this term with colors to any termcolor writer at the given width.
    fn pretty_render_to<W: WriteColor + Write>(&self, width: usize, out: &mut W) -> io::Result<()>;

    /// Print this term to stdout with colors (TTY-aware), at auto-detected width (or 80 if not a TTY).
    fn pretty_print(&self) -> io::Result<()>;

    /// Format this term into a plain string on a single line (no colors).
    fn pretty_string(&self) -> String;

    /// Format this term into a plain string, wrapping at `width` columns.
    fn pretty_string_width(&self, width: usize) -> String;
}

impl PrettyTerm for Term {
    #[inline]
    fn pretty_doc(&self) -> RcDoc<'static, Style> {
        to_doc_with_depth(self, 0)
    }

    #[inline]
    fn pretty_render_to<W: WriteColor + Write>(&self, width: usize, out: &mut W) -> io::Result<()> {
        let doc = self.pretty_doc();
        render_to(&doc, width, out)
    }

    fn pretty_print(&self) -> io::Result<()> {
        let stdout = StandardStream::stdout(ColorChoice::Auto);
        let mut stdout = stdout.lock();
        self.pretty_render_to(terminal_width(), &mut stdout)
    }

    #[inline]
    fn pretty_string(&self) -> String {
        to_plain_string(self, FLAT_WIDTH)
    }

    #[inline]
    fn pretty_string_width(&self, width: usize) -> String {
        to_plain_string(self, width)
    }
}

/// Adapter that formats a term through the document renderer at a fixed width.
pub struct Pretty<'t> {
    term: &'t Term,
    width: usize,
}

impl<'t> Pretty<'t> {
    pub fn new(term: &'t Term, width: usize) -> Self {
        Self { term, width }
    }
}

impl<'t> fmt::Display for Pretty<'t> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FmtWrite::new(f);
        self.term.pretty_doc().render_raw(self.width, &mut w)
    }
}
