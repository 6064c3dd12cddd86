use crate::error::ParseError;

use super::{
    classify::LineClass,
    indent::IndentStack,
    kinds::{Doctest, FieldTag, ListItem, Literal, Section},
    types::{Block, BlockKind},
};

/// Everything an alternative may change. Cloned before each speculative
/// alternative and restored if the alternative does not match.
#[derive(Debug, Clone, Default)]
struct RecognizerState {
    /// Index of the next unconsumed line.
    pos: usize,
    indents: IndentStack,
    /// Fixed indent of the paragraph being read.
    paragraph_indent: Option<usize>,
    /// Fixed indent of the doctest being read.
    doctest_indent: Option<usize>,
    /// Indent of the block that introduced the literal being read.
    literal_indent: Option<usize>,
    /// Set when the previous block ended in `::`; holds its indent.
    literal_intro: Option<usize>,
}

/// Counts recognition attempts against an optional hard cap.
#[derive(Debug, Clone, Copy)]
struct Budget {
    used: usize,
    limit: usize,
}

impl Budget {
    fn charge(&mut self) -> Result<(), ParseError> {
        self.used += 1;
        if self.limit != 0 && self.used > self.limit {
            return Err(ParseError::MaxExpressionsLimit { limit: self.limit });
        }
        Ok(())
    }
}

type Attempt = Result<Option<BlockKind>, ParseError>;

/// Turns classified lines into a flat sequence of [`Block`]s.
pub struct BlockRecognizer<'l, 'a> {
    lines: &'l [LineClass<'a>],
    state: RecognizerState,
    budget: Budget,
}

impl<'l, 'a> BlockRecognizer<'l, 'a> {
    /// Creates a recognizer; `max_expressions == 0` disables the budget.
    pub fn new(lines: &'l [LineClass<'a>], max_expressions: usize) -> Self {
        Self {
            lines,
            state: RecognizerState::default(),
            budget: Budget {
                used: 0,
                limit: max_expressions,
            },
        }
    }

    /// Recognizes every block in the input.
    ///
    /// Blank-only input yields an empty sequence.
    pub fn recognize(mut self) -> Result<Vec<Block>, ParseError> {
        let mut out = vec![];
        while let Some(block) = self.next_block()? {
            log::trace!(
                "line {}: {:?} at indent {}",
                block.line + 1,
                block.kind,
                block.indent
            );
            out.push(block);
        }
        log::trace!("{} recognition attempts", self.budget.used);
        Ok(out)
    }

    fn next_block(&mut self) -> Result<Option<Block>, ParseError> {
        self.skip_blank_lines();
        let lines = self.lines;
        let Some(line) = lines.get(self.state.pos) else {
            return Ok(None);
        };
        let depth = self.state.indents.push(line.indent);

        let kind = match self.try_alternatives(line.indent)? {
            Some(kind) => kind,
            None => return Err(ParseError::NoMatch { line: line.number + 1 }),
        };
        if kind.literal_intro() {
            self.state.literal_intro = Some(line.indent);
        }

        Ok(Some(Block {
            indent: line.indent,
            depth,
            line: line.number,
            kind,
        }))
    }

    fn try_alternatives(&mut self, indent: usize) -> Attempt {
        if let Some(intro) = self.state.literal_intro.take()
            && indent > intro
            && let Some(kind) = self.attempt(|r| r.literal(intro))?
        {
            return Ok(Some(kind));
        }

        let alternatives: [fn(&mut Self) -> Attempt; 5] = [
            Self::section,
            Self::list_item,
            Self::field,
            Self::doctest,
            Self::paragraph,
        ];
        for alt in alternatives {
            if let Some(kind) = self.attempt(alt)? {
                return Ok(Some(kind));
            }
        }
        Ok(None)
    }

    /// Runs one alternative speculatively, restoring state if it fails.
    fn attempt(&mut self, alt: impl FnOnce(&mut Self) -> Attempt) -> Attempt {
        self.budget.charge()?;
        let saved = self.state.clone();
        let found = alt(self)?;
        if found.is_none() {
            self.state = saved;
        }
        Ok(found)
    }

    fn skip_blank_lines(&mut self) {
        while self.lines.get(self.state.pos).is_some_and(|l| l.is_blank) {
            self.state.pos += 1;
        }
    }

    fn current(&self) -> LineClass<'a> {
        self.lines[self.state.pos]
    }

    fn at_blank(&self) -> bool {
        self.lines.get(self.state.pos).is_some_and(|l| l.is_blank)
    }

    /// Whether line `i` opens a block that ends a running paragraph.
    fn starts_structure(&self, i: usize) -> bool {
        let line = &self.lines[i];
        ListItem::parse(line.content).is_some()
            || FieldTag::parse(line.content).is_some()
            || self
                .lines
                .get(i + 1)
                .is_some_and(|under| Section::heading(line, under).is_some())
    }

    fn literal(&mut self, intro: usize) -> Attempt {
        let lines = self.lines;
        let start = self.state.pos;
        self.state.literal_indent = Some(intro);

        let mut end = start;
        let mut i = start;
        while let Some(line) = lines.get(i) {
            self.budget.charge()?;
            if !line.is_blank {
                if self.state.literal_indent.is_some_and(|lit| line.indent <= lit) {
                    break;
                }
                self.state.indents.push(line.indent);
                end = i + 1;
            }
            i += 1;
        }

        self.state.literal_indent = None;
        if end == start {
            return Ok(None);
        }
        self.state.pos = end;
        Ok(Some(BlockKind::Literal {
            text: Literal::dedent(&lines[start..end]),
        }))
    }

    fn section(&mut self) -> Attempt {
        let lines = self.lines;
        let pos = self.state.pos;
        let header = &lines[pos];
        let Some(underline) = lines.get(pos + 1) else {
            return Ok(None);
        };
        let Some(level) = Section::heading(header, underline) else {
            return Ok(None);
        };

        self.state.indents.push(underline.indent);
        self.state.pos = pos + 2;
        Ok(Some(BlockKind::Section {
            text: header.content.to_string(),
            level,
        }))
    }

    fn list_item(&mut self) -> Attempt {
        let line = self.current();
        let Some(item) = ListItem::parse(line.content) else {
            return Ok(None);
        };

        self.state.pos += 1;
        let (inline_text, literal_intro) = Literal::split_intro(item.rest);
        Ok(Some(BlockKind::List {
            bullet: item.bullet.to_string(),
            ordered: item.ordered,
            inline_text,
            literal_intro,
            has_trailing_blank: self.at_blank(),
        }))
    }

    fn field(&mut self) -> Attempt {
        let line = self.current();
        let Some(head) = FieldTag::parse(line.content) else {
            return Ok(None);
        };

        self.state.pos += 1;
        let (inline_text, literal_intro) = Literal::split_intro(head.rest);
        Ok(Some(BlockKind::Field {
            name: head.name.to_string(),
            arg: head.arg.map(str::to_string),
            inline_text,
            literal_intro,
            has_trailing_blank: self.at_blank(),
        }))
    }

    fn doctest(&mut self) -> Attempt {
        let lines = self.lines;
        let pos = self.state.pos;
        let first = &lines[pos];
        if !Doctest::opens(first.content) {
            return Ok(None);
        }
        // Only after a blank line, the start of input, or deeper content.
        if pos > 0 && !lines[pos - 1].is_blank && lines[pos - 1].indent <= first.indent {
            return Ok(None);
        }

        self.state.doctest_indent = Some(first.indent);
        let mut end = pos + 1;
        while let Some(line) = lines.get(end) {
            self.budget.charge()?;
            if line.is_blank || self.state.doctest_indent != Some(line.indent) {
                break;
            }
            end += 1;
        }
        self.state.doctest_indent = None;
        self.state.pos = end;

        let text = lines[pos..end]
            .iter()
            .map(|l| l.content)
            .collect::<Vec<_>>()
            .join("\n");
        Ok(Some(BlockKind::Doctest { text }))
    }

    fn paragraph(&mut self) -> Attempt {
        let lines = self.lines;
        let pos = self.state.pos;
        self.state.paragraph_indent = Some(lines[pos].indent);

        let mut end = pos + 1;
        while let Some(line) = lines.get(end) {
            self.budget.charge()?;
            if line.is_blank
                || self.state.paragraph_indent != Some(line.indent)
                || self.starts_structure(end)
            {
                break;
            }
            end += 1;
        }
        self.state.paragraph_indent = None;
        self.state.pos = end;

        let joined = lines[pos..end]
            .iter()
            .map(|l| l.content)
            .collect::<Vec<_>>()
            .join("\n");
        let (text, literal_intro) = Literal::split_intro(&joined);
        Ok(Some(BlockKind::Paragraph {
            text,
            literal_intro,
        }))
    }
}
