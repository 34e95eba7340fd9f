//! RcDoc-based pretty-printer with termcolor annotations for [`Term`].
//!
//! Role
//! - Convert a `Term` into an annotated document suitable for width-aware rendering.
//! - Provide colored output for terminals (TTY-aware) and plain strings for logs/tests.
//!
//! Performance
//! - Building the doc is O(n) in term size; rendering respects line widths with
//!   linear-time layout in the size of the resulting document.

use crate::term::{Term, TermType};
use pretty::{FmtWrite, RcDoc, RenderAnnotated};
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Styles used to annotate parts of the pretty-printed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Punct, // commas, braces, semicolons, brackets
    /// Parentheses are colored by nesting depth so matching pairs share a color.
    Paren(u8),
    Keyword,  // λ, let, <fn>
    Operator, // =, *
    Ident,    // variables and binders
    Literal,  // numbers and strings
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
            Style::Keyword => {
                s.set_fg(Some(Color::Cyan)).set_bold(true);
            }
            Style::Operator => {
                s.set_fg(Some(Color::Yellow)).set_bold(true);
            }
            Style::Ident => {
                s.set_fg(Some(Color::Green)).set_bold(true);
            }
            Style::Literal => {
                s.set_fg(Some(Color::Magenta));
            }
        }
        s
    }
}

fn styled(style: Style, s: &'static str) -> RcDoc<'static, Style> {
    RcDoc::as_string(s).annotate(style)
}

fn punct(s: &'static str) -> RcDoc<'static, Style> {
    styled(Style::Punct, s)
}

#[inline]
fn lparen(depth: u8) -> RcDoc<'static, Style> {
    RcDoc::as_string("(").annotate(Style::Paren(depth))
}

#[inline]
fn rparen(depth: u8) -> RcDoc<'static, Style> {
    RcDoc::as_string(")").annotate(Style::Paren(depth))
}

fn kw(s: &'static str) -> RcDoc<'static, Style> {
    styled(Style::Keyword, s)
}

fn op(s: &'static str) -> RcDoc<'static, Style> {
    styled(Style::Operator, s)
}

fn ident(name: &str) -> RcDoc<'static, Style> {
    RcDoc::text(name.to_owned()).annotate(Style::Ident)
}

fn literal(text: String) -> RcDoc<'static, Style> {
    RcDoc::text(text).annotate(Style::Literal)
}

fn calculate_precedence(t: TermType) -> u8 {
    use TermType::*;

    match t {
        Lam | Dup => 1,
        App => 2,
        Var | Num | Str | Pair | List | Era | Opaque => 255,
    }
}

/// Binders extend as far right as possible, so they need parentheses in function position.
/// Application chains `f(x)(y)` read unambiguously and are printed without extra parentheses.
#[inline]
fn requires_parens(current_type: TermType, parent_type: TermType) -> bool {
    calculate_precedence(parent_type) > calculate_precedence(current_type)
}

#[inline]
fn to_doc_parenthesized_with_depth(
    t: &Term,
    parent_type: TermType,
    depth: u8,
) -> RcDoc<'static, Style> {
    if requires_parens(t.r#type(), parent_type) {
        lparen(depth)
            .append(to_doc_with_depth(t, depth + 1))
            .append(rparen(depth))
            .group()
    } else {
        to_doc_with_depth(t, depth)
    }
}

fn delimited<'t>(
    open: RcDoc<'static, Style>,
    items: impl Iterator<Item = &'t Term>,
    close: RcDoc<'static, Style>,
    depth: u8,
) -> RcDoc<'static, Style> {
    let sep = punct(",").append(RcDoc::line());
    open.append(
        RcDoc::intersperse(items.map(|t| to_doc_with_depth(t, depth + 1)), sep).nest(1),
    )
    .append(close)
    .group()
}

/// Depth-aware variant that colors parentheses by nesting level.
fn to_doc_with_depth(t: &Term, depth: u8) -> RcDoc<'static, Style> {
    match t {
        Term::Var(name) => ident(name),
        Term::Num(n) => literal(n.to_string()),
        Term::Str(s) => literal(format!("{s:?}")),
        Term::Era => op("*"),
        Term::Opaque => kw("<fn>"),
        Term::Lam { binder, body } => kw("λ")
            .append(ident(binder))
            .append(punct("."))
            .append(RcDoc::line())
            .append(to_doc_parenthesized_with_depth(body, TermType::Lam, depth))
            .nest(2)
            .group(),
        Term::App { func, arg } => to_doc_parenthesized_with_depth(func, TermType::App, depth)
            .append(lparen(depth))
            .append(to_doc_with_depth(arg, depth + 1))
            .append(rparen(depth))
            .group(),
        Term::Pair(a, b) => delimited(
            lparen(depth),
            [&**a, &**b].into_iter(),
            rparen(depth),
            depth,
        ),
        Term::List(items) if items.is_empty() => punct("[]"),
        Term::List(items) => delimited(punct("["), items.iter(), punct("]"), depth),
        Term::Dup {
            left,
            right,
            value,
            body,
        } => kw("let")
            .append(RcDoc::space())
            .append(punct("{"))
            .append(ident(left))
            .append(RcDoc::space())
            .append(ident(right))
            .append(punct("}"))
            .append(RcDoc::space())
            .append(op("="))
            .append(RcDoc::space())
            .append(to_doc_parenthesized_with_depth(value, TermType::Dup, depth))
            .append(punct(";"))
            .append(RcDoc::line())
            .append(to_doc_parenthesized_with_depth(body, TermType::Dup, depth))
            .group(),
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
    let _ = to_doc_with_depth(t, 0).render_fmt(width, &mut buf);
    buf
}

/// Width of the terminal, or 80 if it cannot be determined.
pub fn terminal_width() -> usize {
    term_size::dimensions().map(|(w, _)| w).unwrap_or(80)
}

/// ======================== Trait impls =========================
/// Pretty-printing conveniences for terms.
pub trait PrettyTerm {
    /// Build an RcDoc representation with style annotations.
    fn pretty_doc(&self) -> RcDoc<'static, Style>;

    /// Render with colors to any termcolor writer at the given width.
    fn pretty_render_to<W: WriteColor + Write>(&self, width: usize, out: &mut W) -> io::Result<()>;

    /// Print to stdout with the given color choice and width.
    fn pretty_print_with(&self, width: usize, choice: ColorChoice) -> io::Result<()>;

    /// Print to stdout with colors (TTY-aware), at auto-detected width (or 80 if not a TTY).
    fn pretty_print(&self) -> io::Result<()> {
        self.pretty_print_with(terminal_width(), ColorChoice::Auto)
    }

    /// Format into a plain string (no colors) at the given width.
    fn pretty_string_width(&self, width: usize) -> String;

    /// Format into a plain string (no colors) at width 80.
    fn pretty_string(&self) -> String {
        self.pretty_string_width(80)
    }
}

impl PrettyTerm for Term {
    #[inline]
    fn pretty_doc(&self) -> RcDoc<'static, Style> {
        to_doc_with_depth(self, 0)
    }

    #[inline]
    fn pretty_render_to<W: WriteColor + Write>(&self, width: usize, out: &mut W) -> io::Result<()> {
        render_to(&self.pretty_doc(), width, out)
    }

    fn pretty_print_with(&self, width: usize, choice: ColorChoice) -> io::Result<()> {
        let stdout = StandardStream::stdout(choice);
        let mut stdout = stdout.lock();
        self.pretty_render_to(width, &mut stdout)
    }

    #[inline]
    fn pretty_string_width(&self, width: usize) -> String {
        to_plain_string(self, width)
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut w = FmtWrite::new(f);
        self.pretty_doc().render_raw(80, &mut w)
    }
}
