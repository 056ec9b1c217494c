//! Assemble rendered figures into a LaTeX beamer summary document.
//!
//! The document groups figures into sections, four per frame in a
//! two-column layout. Output is a `.tex` file referencing the figure
//! files; compiling it (pdflatex) is left to the user.

use std::fmt::Write;
use std::path::{Path, PathBuf};

const FIGS_PER_FRAME: usize = 4;

/// A beamer summary document under construction.
pub struct SummaryDoc {
    title: String,
    author: String,
    sections: Vec<Section>,
}

struct Section {
    title: String,
    figures: Vec<PathBuf>,
}

impl SummaryDoc {
    pub fn new(title: &str, author: &str) -> Self {
        Self { title: title.into(), author: author.into(), sections: Vec::new() }
    }

    /// Start a new section; figures added afterwards land in it.
    pub fn add_section(&mut self, title: &str) {
        self.sections.push(Section { title: title.into(), figures: Vec::new() });
    }

    /// Add a figure to the current section (opening a "Figures" section
    /// if none exists yet).
    pub fn add_figure(&mut self, path: &Path) {
        if self.sections.is_empty() {
            self.add_section("Figures");
        }
        self.sections.last_mut().unwrap().figures.push(path.to_path_buf());
    }

    /// Render the complete LaTeX source.
    pub fn to_latex(&self) -> String {
        let mut tex = String::new();
        tex.push_str("\\documentclass{beamer}\n\n");
        tex.push_str("\\usepackage{graphicx}\n\n");
        tex.push_str("\\setbeamertemplate{footline}[frame number]{}\n");
        tex.push_str("\\setbeamertemplate{navigation symbols}{}\n");
        let _ = writeln!(tex, "\\title{{{}}}", escape_tex(&self.title));
        let _ = writeln!(tex, "\\author{{{}}}", escape_tex(&self.author));
        tex.push_str("\n\\begin{document}\n\n");
        tex.push_str("\\frame[plain]{\\titlepage}\n");
        tex.push_str("\\frame[plain]{\\tableofcontents}\n");

        for section in &self.sections {
            let title = escape_tex(&section.title);
            let _ = writeln!(tex, "\n\\section*{{{title}}}");
            for frame_figs in section.figures.chunks(FIGS_PER_FRAME) {
                tex.push_str("\\begin{frame}[plain]\n");
                let _ = writeln!(tex, "\\frametitle{{{title}}}");
                tex.push_str("\\begin{columns}\n");
                // Left column gets figures 0 and 1, right column 2 and 3.
                for column in frame_figs.chunks(2) {
                    tex.push_str("\\begin{column}{.45\\textwidth}\n");
                    let graphics: Vec<String> = column
                        .iter()
                        .map(|p| {
                            format!("\\includegraphics[width=\\textwidth]{{{}}}", p.display())
                        })
                        .collect();
                    tex.push_str(&graphics.join("\\\\\n"));
                    tex.push_str("\n\\end{column}\n");
                }
                tex.push_str("\\end{columns}\n");
                tex.push_str("\\end{frame}\n");
            }
        }

        tex.push_str("\n\\end{document}\n");
        tex
    }
}

/// Escape the LaTeX special characters that show up in titles.
fn escape_tex(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\textbackslash{}"),
            '#' | '$' | '%' | '&' | '_' | '{' | '}' => {
                out.push('\\');
                out.push(c);
            }
            '~' => out.push_str("\\textasciitilde{}"),
            '^' => out.push_str("\\textasciicircum{}"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with_figures(n: usize) -> SummaryDoc {
        let mut doc = SummaryDoc::new("Test summary", "A. Author");
        for i in 0..n {
            doc.add_figure(Path::new(&format!("figures/fig{i}.pdf")));
        }
        doc
    }

    #[test]
    fn document_skeleton() {
        let tex = doc_with_figures(1).to_latex();
        assert!(tex.starts_with("\\documentclass{beamer}"));
        assert!(tex.contains("\\title{Test summary}"));
        assert!(tex.contains("\\author{A. Author}"));
        assert!(tex.contains("\\section*{Figures}"));
        assert!(tex.contains("\\includegraphics[width=\\textwidth]{figures/fig0.pdf}"));
        assert!(tex.trim_end().ends_with("\\end{document}"));
    }

    #[test]
    fn four_figures_per_frame() {
        let tex = doc_with_figures(5).to_latex();
        assert_eq!(tex.matches("\\begin{frame}").count(), 2);
        assert_eq!(tex.matches("\\includegraphics").count(), 5);
        // A full frame holds two columns of two figures each.
        assert_eq!(tex.matches("\\begin{columns}").count(), 2);
    }

    #[test]
    fn sections_group_figures() {
        let mut doc = SummaryDoc::new("t", "a");
        doc.add_section("pp results");
        doc.add_figure(Path::new("a.pdf"));
        doc.add_section("p-Pb results");
        doc.add_figure(Path::new("b.pdf"));
        let tex = doc.to_latex();
        assert!(tex.contains("\\section*{pp results}"));
        assert!(tex.contains("\\section*{p-Pb results}"));
        assert!(tex.contains("\\frametitle{p-Pb results}"));
    }

    #[test]
    fn titles_are_escaped() {
        let mut doc = SummaryDoc::new("p_T spectra, 0-5%", "a");
        doc.add_figure(Path::new("a.pdf"));
        let tex = doc.to_latex();
        assert!(tex.contains("\\title{p\\_T spectra, 0-5\\%}"));
    }
}
