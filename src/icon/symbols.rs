//! Built-in vector symbols drawn inside icons.
//!
//! Each symbol is an SVG fragment in a local coordinate space centered on the
//! origin and roughly 120px across. Fragments paint with `currentColor`, which
//! the renderer binds to the palette accent.

use std::fmt;
use std::str::FromStr;

use crate::error::ProfileError;

macro_rules! symbols {
    ($( $(#[$attr:meta])* $variant:ident => $name:literal, $markup:literal; )+) => {
        /// A named glyph from the fixed symbol registry.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Symbol {
            $( $(#[$attr])* $variant, )+
        }

        impl Symbol {
            /// Every registered symbol, in registry order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Name used in page definitions.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }

            /// SVG fragment for this symbol.
            pub const fn markup(self) -> &'static str {
                match self {
                    $(Self::$variant => $markup,)+
                }
            }
        }
    };
}

symbols! {
    // General
    Terminal => "terminal", r##"<rect x="-48" y="-36" width="96" height="72" rx="8" fill="none" stroke="currentColor" stroke-width="5"/>
<polyline points="-30,-12 -10,8 -30,28" fill="none" stroke="currentColor" stroke-width="5" stroke-linecap="round" stroke-linejoin="round"/>
<line x1="0" y1="28" x2="30" y2="28" stroke="currentColor" stroke-width="5" stroke-linecap="round"/>"##;
    Slash => "slash", r##"<text x="0" y="12" text-anchor="middle" font-family="SF Mono,Menlo,DejaVu Sans Mono,monospace" font-size="64" font-weight="700" fill="currentColor">/</text>"##;
    Clear => "clear", r##"<circle cx="0" cy="0" r="32" fill="none" stroke="currentColor" stroke-width="5"/>
<line x1="-16" y1="-16" x2="16" y2="16" stroke="currentColor" stroke-width="5" stroke-linecap="round"/>
<line x1="16" y1="-16" x2="-16" y2="16" stroke="currentColor" stroke-width="5" stroke-linecap="round"/>"##;
    Compact => "compact", r##"<line x1="-30" y1="-20" x2="30" y2="-20" stroke="currentColor" stroke-width="5" stroke-linecap="round"/>
<line x1="-30" y1="-4" x2="30" y2="-4" stroke="currentColor" stroke-width="5" stroke-linecap="round"/>
<line x1="-30" y1="12" x2="14" y2="12" stroke="currentColor" stroke-width="5" stroke-linecap="round"/>
<polyline points="0,20 12,32 24,20" fill="none" stroke="currentColor" stroke-width="5" stroke-linecap="round" stroke-linejoin="round"/>"##;
    Resume => "resume", r##"<polygon points="-16,-24 24,0 -16,24" fill="currentColor"/>
<line x1="-26" y1="-24" x2="-26" y2="24" stroke="currentColor" stroke-width="6" stroke-linecap="round"/>"##;
    Status => "status", r##"<circle cx="0" cy="0" r="32" fill="none" stroke="currentColor" stroke-width="5"/>
<circle cx="0" cy="0" r="4" fill="currentColor"/>
<line x1="0" y1="0" x2="0" y2="-22" stroke="currentColor" stroke-width="4" stroke-linecap="round"/>
<line x1="0" y1="0" x2="16" y2="10" stroke="currentColor" stroke-width="4" stroke-linecap="round"/>"##;
    Cost => "cost", r##"<text x="0" y="14" text-anchor="middle" font-family="SF Pro Display,Helvetica Neue,Arial,sans-serif" font-size="56" font-weight="700" fill="currentColor">$</text>"##;
    Context => "context", r##"<rect x="-32" y="-24" width="64" height="48" rx="6" fill="none" stroke="currentColor" stroke-width="5"/>
<line x1="-20" y1="-10" x2="20" y2="-10" stroke="currentColor" stroke-width="4" stroke-linecap="round"/>
<line x1="-20" y1="2" x2="20" y2="2" stroke="currentColor" stroke-width="4" stroke-linecap="round"/>
<line x1="-20" y1="14" x2="8" y2="14" stroke="currentColor" stroke-width="4" stroke-linecap="round"/>"##;
    Yolo => "yolo", r##"<text x="0" y="10" text-anchor="middle" font-family="SF Pro Display,Helvetica Neue,Arial,sans-serif" font-size="36" font-weight="900" fill="currentColor">⚡</text>"##;

    // Claude Code Ext
    Model => "model", r##"<rect x="-30" y="-28" width="60" height="56" rx="8" fill="none" stroke="currentColor" stroke-width="5"/>
<circle cx="0" cy="-6" r="12" fill="none" stroke="currentColor" stroke-width="4"/>
<line x1="-16" y1="16" x2="16" y2="16" stroke="currentColor" stroke-width="4" stroke-linecap="round"/>"##;
    Config => "config", r##"<circle cx="0" cy="0" r="14" fill="none" stroke="currentColor" stroke-width="5"/>
<circle cx="0" cy="0" r="5" fill="currentColor"/>
<line x1="0" y1="-30" x2="0" y2="-16" stroke="currentColor" stroke-width="5" stroke-linecap="round"/>
<line x1="0" y1="16" x2="0" y2="30" stroke="currentColor" stroke-width="5" stroke-linecap="round"/>
<line x1="-30" y1="0" x2="-16" y2="0" stroke="currentColor" stroke-width="5" stroke-linecap="round"/>
<line x1="16" y1="0" x2="30" y2="0" stroke="currentColor" stroke-width="5" stroke-linecap="round"/>"##;
    Help => "help", r##"<circle cx="0" cy="-4" r="30" fill="none" stroke="currentColor" stroke-width="5"/>
<text x="0" y="8" text-anchor="middle" font-family="SF Pro Display,Helvetica Neue,Arial,sans-serif" font-size="40" font-weight="700" fill="currentColor">?</text>"##;
    Permissions => "permissions", r##"<rect x="-24" y="-8" width="48" height="40" rx="6" fill="none" stroke="currentColor" stroke-width="5"/>
<circle cx="0" cy="-16" r="16" fill="none" stroke="currentColor" stroke-width="5"/>
<circle cx="0" cy="12" r="4" fill="currentColor"/>"##;
    Init => "init", r##"<polyline points="-24,-20 -24,24 24,24" fill="none" stroke="currentColor" stroke-width="5" stroke-linecap="round" stroke-linejoin="round"/>
<polyline points="-12,8 4,-8 20,4" fill="none" stroke="currentColor" stroke-width="5" stroke-linecap="round" stroke-linejoin="round"/>"##;
    Login => "login", r##"<circle cx="0" cy="-16" r="14" fill="none" stroke="currentColor" stroke-width="5"/>
<path d="M-28 28 Q-28 4, 0 4 Q28 4, 28 28" fill="none" stroke="currentColor" stroke-width="5"/>"##;
    Memory => "memory", r##"<rect x="-28" y="-24" width="56" height="48" rx="4" fill="none" stroke="currentColor" stroke-width="5"/>
<line x1="-16" y1="-24" x2="-16" y2="24" stroke="currentColor" stroke-width="3"/>
<line x1="0" y1="-24" x2="0" y2="24" stroke="currentColor" stroke-width="3"/>
<line x1="16" y1="-24" x2="16" y2="24" stroke="currentColor" stroke-width="3"/>
<line x1="-28" y1="0" x2="28" y2="0" stroke="currentColor" stroke-width="3"/>"##;
    Vim => "vim", r##"<text x="0" y="12" text-anchor="middle" font-family="SF Mono,Menlo,DejaVu Sans Mono,monospace" font-size="48" font-weight="700" fill="currentColor">Vi</text>"##;

    // Claude Desktop
    AppLaunch => "appLaunch", r##"<rect x="-32" y="-32" width="64" height="64" rx="14" fill="none" stroke="currentColor" stroke-width="5"/>
<polygon points="-10,-16 18,0 -10,16" fill="currentColor"/>"##;
    NewChat => "newChat", r##"<path d="M-28 -20 L28 -20 Q36 -20, 36 -12 L36 12 Q36 20, 28 20 L4 20 L-8 32 L-8 20 L-28 20 Q-36 20, -36 12 L-36 -12 Q-36 -20, -28 -20Z" fill="none" stroke="currentColor" stroke-width="5"/>
<line x1="-12" y1="0" x2="12" y2="0" stroke="currentColor" stroke-width="5" stroke-linecap="round"/>
<line x1="0" y1="-12" x2="0" y2="12" stroke="currentColor" stroke-width="5" stroke-linecap="round"/>"##;
    Search => "search", r##"<circle cx="-6" cy="-6" r="22" fill="none" stroke="currentColor" stroke-width="5"/>
<line x1="10" y1="10" x2="28" y2="28" stroke="currentColor" stroke-width="6" stroke-linecap="round"/>"##;
    Upload => "upload", r##"<polyline points="-16,4 0,-14 16,4" fill="none" stroke="currentColor" stroke-width="5" stroke-linecap="round" stroke-linejoin="round"/>
<line x1="0" y1="-12" x2="0" y2="20" stroke="currentColor" stroke-width="5" stroke-linecap="round"/>
<path d="M-28 16 L-28 28 L28 28 L28 16" fill="none" stroke="currentColor" stroke-width="5" stroke-linecap="round" stroke-linejoin="round"/>"##;
    Artifacts => "artifacts", r##"<rect x="-28" y="-28" width="56" height="56" rx="6" fill="none" stroke="currentColor" stroke-width="5"/>
<line x1="0" y1="-28" x2="0" y2="28" stroke="currentColor" stroke-width="4"/>
<line x1="-28" y1="0" x2="28" y2="0" stroke="currentColor" stroke-width="4"/>"##;
    Globe => "globe", r##"<circle cx="0" cy="0" r="28" fill="none" stroke="currentColor" stroke-width="5"/>
<ellipse cx="0" cy="0" rx="14" ry="28" fill="none" stroke="currentColor" stroke-width="3"/>
<line x1="-28" y1="0" x2="28" y2="0" stroke="currentColor" stroke-width="3"/>"##;
    Copy => "copy", r##"<rect x="-20" y="-24" width="36" height="44" rx="4" fill="none" stroke="currentColor" stroke-width="4"/>
<rect x="-12" y="-16" width="36" height="44" rx="4" fill="none" stroke="currentColor" stroke-width="4"/>"##;
    Research => "research", r##"<circle cx="-8" cy="-8" r="20" fill="none" stroke="currentColor" stroke-width="5"/>
<line x1="6" y1="6" x2="24" y2="24" stroke="currentColor" stroke-width="6" stroke-linecap="round"/>
<line x1="-8" y1="-16" x2="-8" y2="0" stroke="currentColor" stroke-width="4" stroke-linecap="round"/>
<line x1="-16" y1="-8" x2="0" y2="-8" stroke="currentColor" stroke-width="4" stroke-linecap="round"/>"##;

    // Antigravity
    NewSession => "newSession", r##"<rect x="-28" y="-24" width="56" height="48" rx="6" fill="none" stroke="currentColor" stroke-width="5"/>
<line x1="-12" y1="0" x2="12" y2="0" stroke="currentColor" stroke-width="5" stroke-linecap="round"/>
<line x1="0" y1="-12" x2="0" y2="12" stroke="currentColor" stroke-width="5" stroke-linecap="round"/>"##;
    Branch => "branch", r##"<circle cx="-12" cy="-16" r="6" fill="currentColor"/>
<circle cx="12" cy="-16" r="6" fill="currentColor"/>
<circle cx="0" cy="20" r="6" fill="currentColor"/>
<line x1="-12" y1="-10" x2="-6" y2="14" stroke="currentColor" stroke-width="4"/>
<line x1="12" y1="-10" x2="6" y2="14" stroke="currentColor" stroke-width="4"/>"##;
    Library => "library", r##"<rect x="-30" y="-24" width="16" height="48" rx="3" fill="none" stroke="currentColor" stroke-width="4"/>
<rect x="-8" y="-24" width="16" height="48" rx="3" fill="none" stroke="currentColor" stroke-width="4"/>
<rect x="14" y="-24" width="16" height="48" rx="3" fill="none" stroke="currentColor" stroke-width="4"/>"##;
    ExportIcon => "exportIcon", r##"<polyline points="-16,-4 0,-22 16,-4" fill="none" stroke="currentColor" stroke-width="5" stroke-linecap="round" stroke-linejoin="round"/>
<line x1="0" y1="-20" x2="0" y2="16" stroke="currentColor" stroke-width="5" stroke-linecap="round"/>
<rect x="-28" y="20" width="56" height="6" rx="3" fill="currentColor"/>"##;
    Share => "share", r##"<circle cx="20" cy="-20" r="8" fill="none" stroke="currentColor" stroke-width="4"/>
<circle cx="-20" cy="0" r="8" fill="none" stroke="currentColor" stroke-width="4"/>
<circle cx="20" cy="20" r="8" fill="none" stroke="currentColor" stroke-width="4"/>
<line x1="-12" y1="-4" x2="12" y2="-16" stroke="currentColor" stroke-width="4"/>
<line x1="-12" y1="4" x2="12" y2="16" stroke="currentColor" stroke-width="4"/>"##;
    Undo => "undo", r##"<polyline points="12,-20 -16,-20 -16,4" fill="none" stroke="currentColor" stroke-width="5" stroke-linecap="round" stroke-linejoin="round"/>
<polyline points="-28,4 -16,16 -4,4" fill="none" stroke="currentColor" stroke-width="5" stroke-linecap="round" stroke-linejoin="round"/>"##;
    Redo => "redo", r##"<polyline points="-12,-20 16,-20 16,4" fill="none" stroke="currentColor" stroke-width="5" stroke-linecap="round" stroke-linejoin="round"/>
<polyline points="4,4 16,16 28,4" fill="none" stroke="currentColor" stroke-width="5" stroke-linecap="round" stroke-linejoin="round"/>"##;

    // NotebookLM
    Notebook => "notebook", r##"<rect x="-28" y="-32" width="56" height="64" rx="4" fill="none" stroke="currentColor" stroke-width="5"/>
<line x1="-16" y1="-32" x2="-16" y2="32" stroke="currentColor" stroke-width="4"/>
<line x1="-8" y1="-14" x2="20" y2="-14" stroke="currentColor" stroke-width="3" stroke-linecap="round"/>
<line x1="-8" y1="-2" x2="20" y2="-2" stroke="currentColor" stroke-width="3" stroke-linecap="round"/>
<line x1="-8" y1="10" x2="12" y2="10" stroke="currentColor" stroke-width="3" stroke-linecap="round"/>"##;
    AddSource => "addSource", r##"<rect x="-28" y="-20" width="40" height="48" rx="4" fill="none" stroke="currentColor" stroke-width="4"/>
<circle cx="16" cy="-8" r="16" fill="none" stroke="currentColor" stroke-width="4"/>
<line x1="8" y1="-8" x2="24" y2="-8" stroke="currentColor" stroke-width="4" stroke-linecap="round"/>
<line x1="16" y1="-16" x2="16" y2="0" stroke="currentColor" stroke-width="4" stroke-linecap="round"/>"##;
    Audio => "audio", r##"<rect x="-8" y="-28" width="16" height="32" rx="8" fill="none" stroke="currentColor" stroke-width="5"/>
<path d="M-20 4 Q-20 24, 0 24 Q20 24, 20 4" fill="none" stroke="currentColor" stroke-width="5"/>
<line x1="0" y1="24" x2="0" y2="32" stroke="currentColor" stroke-width="5" stroke-linecap="round"/>"##;
    Chat => "chat", r##"<path d="M-28 -20 L28 -20 Q36 -20, 36 -12 L36 12 Q36 20, 28 20 L4 20 L-8 32 L-8 20 L-28 20 Q-36 20, -36 12 L-36 -12 Q-36 -20, -28 -20Z" fill="none" stroke="currentColor" stroke-width="5"/>
<line x1="-18" y1="-4" x2="18" y2="-4" stroke="currentColor" stroke-width="4" stroke-linecap="round"/>
<line x1="-18" y1="8" x2="8" y2="8" stroke="currentColor" stroke-width="4" stroke-linecap="round"/>"##;
    StudyGuide => "studyGuide", r##"<path d="M0 -28 L-32 -16 L0 -4 L32 -16Z" fill="none" stroke="currentColor" stroke-width="4" stroke-linejoin="round"/>
<path d="M-24 -10 L-24 12 Q0 28, 24 12 L24 -10" fill="none" stroke="currentColor" stroke-width="4"/>
<line x1="32" y1="-16" x2="32" y2="8" stroke="currentColor" stroke-width="4" stroke-linecap="round"/>"##;
    Save => "save", r##"<path d="M-28 -28 L16 -28 L28 -16 L28 28 L-28 28Z" fill="none" stroke="currentColor" stroke-width="5" stroke-linejoin="round"/>
<rect x="-12" y="8" width="24" height="20" rx="2" fill="none" stroke="currentColor" stroke-width="4"/>
<rect x="-8" y="-28" width="20" height="14" rx="2" fill="none" stroke="currentColor" stroke-width="3"/>"##;

    // AI Studio
    Star => "star", r##"<polygon points="0,-30 8,-10 30,-10 12,4 20,26 0,14 -20,26 -12,4 -30,-10 -8,-10" fill="none" stroke="currentColor" stroke-width="4" stroke-linejoin="round"/>"##;
    NewPrompt => "newPrompt", r##"<rect x="-28" y="-24" width="56" height="48" rx="6" fill="none" stroke="currentColor" stroke-width="5"/>
<line x1="-16" y1="-8" x2="16" y2="-8" stroke="currentColor" stroke-width="4" stroke-linecap="round"/>
<line x1="-16" y1="6" x2="4" y2="6" stroke="currentColor" stroke-width="4" stroke-linecap="round"/>"##;
    Structured => "structured", r##"<rect x="-28" y="-24" width="56" height="48" rx="6" fill="none" stroke="currentColor" stroke-width="5"/>
<line x1="-28" y1="-8" x2="28" y2="-8" stroke="currentColor" stroke-width="3"/>
<line x1="-28" y1="8" x2="28" y2="8" stroke="currentColor" stroke-width="3"/>
<line x1="0" y1="-24" x2="0" y2="24" stroke="currentColor" stroke-width="3"/>"##;
    Run => "run", r##"<polygon points="-14,-24 22,0 -14,24" fill="currentColor"/>"##;
    Key => "key", r##"<circle cx="-8" cy="-8" r="18" fill="none" stroke="currentColor" stroke-width="5"/>
<line x1="6" y1="6" x2="28" y2="28" stroke="currentColor" stroke-width="5" stroke-linecap="round"/>
<line x1="20" y1="28" x2="28" y2="28" stroke="currentColor" stroke-width="5" stroke-linecap="round"/>
<line x1="28" y1="20" x2="28" y2="28" stroke="currentColor" stroke-width="5" stroke-linecap="round"/>"##;
    Settings => "settings", r##"<circle cx="0" cy="0" r="12" fill="none" stroke="currentColor" stroke-width="5"/>
<path d="M-4,-30 L4,-30 L6,-20 Q12,-18,16,-14 L26,-18 L30,-12 L22,-6 Q24,-2,24,2 L30,6 L26,14 L18,10 Q14,14,10,16 L10,26 L2,30 L-2,20 Q-6,22,-10,22 L-16,30 L-22,24 L-16,18 Q-20,14,-22,10 L-30,8 L-30,0 L-22,-4 Q-22,-10,-20,-14 L-26,-20 L-20,-26 L-14,-20 Q-10,-22,-6,-22Z" fill="none" stroke="currentColor" stroke-width="3"/>"##;
    Compare => "compare", r##"<rect x="-32" y="-24" width="28" height="48" rx="4" fill="none" stroke="currentColor" stroke-width="4"/>
<rect x="4" y="-24" width="28" height="48" rx="4" fill="none" stroke="currentColor" stroke-width="4"/>
<line x1="-18" y1="-8" x2="-18" y2="8" stroke="currentColor" stroke-width="4" stroke-linecap="round"/>
<line x1="18" y1="-8" x2="18" y2="8" stroke="currentColor" stroke-width="4" stroke-linecap="round"/>"##;

    // System
    Mic => "mic", r##"<rect x="-10" y="-30" width="20" height="36" rx="10" fill="none" stroke="currentColor" stroke-width="5"/>
<path d="M-24 0 Q-24 24, 0 24 Q24 24, 24 0" fill="none" stroke="currentColor" stroke-width="5"/>
<line x1="0" y1="24" x2="0" y2="32" stroke="currentColor" stroke-width="5" stroke-linecap="round"/>"##;
    MicMute => "micMute", r##"<rect x="-10" y="-30" width="20" height="36" rx="10" fill="none" stroke="currentColor" stroke-width="5"/>
<path d="M-24 0 Q-24 24, 0 24 Q24 24, 24 0" fill="none" stroke="currentColor" stroke-width="5"/>
<line x1="0" y1="24" x2="0" y2="32" stroke="currentColor" stroke-width="5" stroke-linecap="round"/>
<line x1="-28" y1="-28" x2="28" y2="28" stroke="currentColor" stroke-width="5" stroke-linecap="round"/>"##;
    Mute => "mute", r##"<polygon points="-20,-20 -4,-20 16,-32 16,32 -4,20 -20,20" fill="none" stroke="currentColor" stroke-width="5" stroke-linejoin="round"/>
<line x1="26" y1="-12" x2="40" y2="12" stroke="currentColor" stroke-width="5" stroke-linecap="round"/>
<line x1="40" y1="-12" x2="26" y2="12" stroke="currentColor" stroke-width="5" stroke-linecap="round"/>"##;
    Camera => "camera", r##"<rect x="-32" y="-20" width="64" height="44" rx="8" fill="none" stroke="currentColor" stroke-width="5"/>
<circle cx="0" cy="2" r="14" fill="none" stroke="currentColor" stroke-width="4"/>
<circle cx="0" cy="2" r="4" fill="currentColor"/>"##;
    ScreenShare => "screenShare", r##"<rect x="-32" y="-24" width="64" height="44" rx="6" fill="none" stroke="currentColor" stroke-width="5"/>
<polyline points="-8,4 0,-8 8,4" fill="none" stroke="currentColor" stroke-width="4" stroke-linecap="round" stroke-linejoin="round"/>
<line x1="0" y1="-6" x2="0" y2="14" stroke="currentColor" stroke-width="4" stroke-linecap="round"/>
<line x1="-16" y1="28" x2="16" y2="28" stroke="currentColor" stroke-width="5" stroke-linecap="round"/>"##;
    Screenshot => "screenshot", r##"<path d="M-28,-28 L-28,-12" fill="none" stroke="currentColor" stroke-width="5" stroke-linecap="round"/>
<path d="M-28,-28 L-12,-28" fill="none" stroke="currentColor" stroke-width="5" stroke-linecap="round"/>
<path d="M28,-28 L28,-12" fill="none" stroke="currentColor" stroke-width="5" stroke-linecap="round"/>
<path d="M28,-28 L12,-28" fill="none" stroke="currentColor" stroke-width="5" stroke-linecap="round"/>
<path d="M-28,28 L-28,12" fill="none" stroke="currentColor" stroke-width="5" stroke-linecap="round"/>
<path d="M-28,28 L-12,28" fill="none" stroke="currentColor" stroke-width="5" stroke-linecap="round"/>
<path d="M28,28 L28,12" fill="none" stroke="currentColor" stroke-width="5" stroke-linecap="round"/>
<path d="M28,28 L12,28" fill="none" stroke="currentColor" stroke-width="5" stroke-linecap="round"/>"##;
    ScreenRecord => "screenRecord", r##"<rect x="-32" y="-24" width="64" height="48" rx="6" fill="none" stroke="currentColor" stroke-width="5"/>
<circle cx="0" cy="0" r="12" fill="currentColor"/>"##;
    Lock => "lock", r##"<rect x="-20" y="-4" width="40" height="32" rx="6" fill="none" stroke="currentColor" stroke-width="5"/>
<path d="M-12,-4 L-12,-16 Q-12,-30, 0,-30 Q12,-30, 12,-16 L12,-4" fill="none" stroke="currentColor" stroke-width="5"/>
<circle cx="0" cy="14" r="4" fill="currentColor"/>"##;
    Sleep => "sleep", r##"<path d="M12,-28 Q-20,-20, -20,0 Q-20,28, 12,28 Q-8,20, -8,0 Q-8,-20, 12,-28Z" fill="none" stroke="currentColor" stroke-width="5"/>"##;

    // Automations
    Automation => "automation", r##"<circle cx="0" cy="0" r="28" fill="none" stroke="currentColor" stroke-width="5"/>
<polyline points="-14,-8 0,-20 14,-8" fill="none" stroke="currentColor" stroke-width="4" stroke-linecap="round" stroke-linejoin="round"/>
<polyline points="-14,8 0,20 14,8" fill="none" stroke="currentColor" stroke-width="4" stroke-linecap="round" stroke-linejoin="round"/>"##;
    Focus => "focus", r##"<circle cx="0" cy="0" r="28" fill="none" stroke="currentColor" stroke-width="5"/>
<circle cx="0" cy="0" r="16" fill="none" stroke="currentColor" stroke-width="4"/>
<circle cx="0" cy="0" r="5" fill="currentColor"/>"##;
    Tile => "tile", r##"<rect x="-28" y="-28" width="24" height="24" rx="4" fill="none" stroke="currentColor" stroke-width="4"/>
<rect x="4" y="-28" width="24" height="24" rx="4" fill="none" stroke="currentColor" stroke-width="4"/>
<rect x="-28" y="4" width="24" height="24" rx="4" fill="none" stroke="currentColor" stroke-width="4"/>
<rect x="4" y="4" width="24" height="24" rx="4" fill="none" stroke="currentColor" stroke-width="4"/>"##;
    Commit => "commit", r##"<circle cx="0" cy="-20" r="8" fill="none" stroke="currentColor" stroke-width="4"/>
<circle cx="0" cy="20" r="8" fill="none" stroke="currentColor" stroke-width="4"/>
<line x1="0" y1="-12" x2="0" y2="12" stroke="currentColor" stroke-width="4"/>
<polyline points="-10,-4 0,6 10,-4" fill="none" stroke="currentColor" stroke-width="4" stroke-linecap="round" stroke-linejoin="round"/>"##;
    Clipboard => "clipboard", r##"<rect x="-22" y="-28" width="44" height="60" rx="4" fill="none" stroke="currentColor" stroke-width="5"/>
<rect x="-10" y="-34" width="20" height="12" rx="3" fill="none" stroke="currentColor" stroke-width="4"/>
<line x1="-10" y1="0" x2="10" y2="0" stroke="currentColor" stroke-width="3" stroke-linecap="round"/>
<line x1="-10" y1="10" x2="10" y2="10" stroke="currentColor" stroke-width="3" stroke-linecap="round"/>
<line x1="-10" y1="20" x2="4" y2="20" stroke="currentColor" stroke-width="3" stroke-linecap="round"/>"##;
    Darkmode => "darkmode", r##"<circle cx="0" cy="0" r="28" fill="none" stroke="currentColor" stroke-width="5"/>
<path d="M0,-28 Q28,-28,28,0 Q28,28,0,28Z" fill="currentColor"/>"##;
    Meeting => "meeting", r##"<circle cx="-12" cy="-16" r="10" fill="none" stroke="currentColor" stroke-width="4"/>
<circle cx="12" cy="-16" r="10" fill="none" stroke="currentColor" stroke-width="4"/>
<path d="M-28 20 Q-28 4, -12 4 Q-4 4, 0 10" fill="none" stroke="currentColor" stroke-width="4"/>
<path d="M28 20 Q28 4, 12 4 Q4 4, 0 10" fill="none" stroke="currentColor" stroke-width="4"/>"##;
    EndSession => "endSession", r##"<rect x="-28" y="-24" width="56" height="48" rx="6" fill="none" stroke="currentColor" stroke-width="5"/>
<rect x="-10" y="-8" width="20" height="16" rx="2" fill="currentColor"/>"##;

    // Encoder icons
    Volume => "volume", r##"<polygon points="-20,-16 -8,-16 8,-28 8,28 -8,16 -20,16" fill="none" stroke="currentColor" stroke-width="4" stroke-linejoin="round"/>
<path d="M16,-12 Q28,0, 16,12" fill="none" stroke="currentColor" stroke-width="4" stroke-linecap="round"/>
<path d="M20,-22 Q40,0, 20,22" fill="none" stroke="currentColor" stroke-width="4" stroke-linecap="round"/>"##;
    Pages => "pages", r##"<rect x="-24" y="-20" width="40" height="44" rx="4" fill="none" stroke="currentColor" stroke-width="4"/>
<rect x="-16" y="-26" width="40" height="44" rx="4" fill="none" stroke="currentColor" stroke-width="4"/>"##;
    Font => "font", r##"<text x="0" y="12" text-anchor="middle" font-family="SF Pro Display,Helvetica Neue,Arial,sans-serif" font-size="56" font-weight="700" fill="currentColor">A</text>"##;
    Scroll => "scroll", r##"<polyline points="-12,-24 0,-36 12,-24" fill="none" stroke="currentColor" stroke-width="5" stroke-linecap="round" stroke-linejoin="round"/>
<line x1="0" y1="-34" x2="0" y2="34" stroke="currentColor" stroke-width="5" stroke-linecap="round"/>
<polyline points="-12,24 0,36 12,24" fill="none" stroke="currentColor" stroke-width="5" stroke-linecap="round" stroke-linejoin="round"/>"##;
    Zoom => "zoom", r##"<circle cx="-6" cy="-6" r="18" fill="none" stroke="currentColor" stroke-width="4"/>
<line x1="8" y1="8" x2="24" y2="24" stroke="currentColor" stroke-width="5" stroke-linecap="round"/>
<line x1="-14" y1="-6" x2="2" y2="-6" stroke="currentColor" stroke-width="4" stroke-linecap="round"/>
<line x1="-6" y1="-14" x2="-6" y2="2" stroke="currentColor" stroke-width="4" stroke-linecap="round"/>"##;
    Theme => "theme", r##"<circle cx="0" cy="-4" r="20" fill="none" stroke="currentColor" stroke-width="5"/>
<line x1="0" y1="-30" x2="0" y2="-26" stroke="currentColor" stroke-width="4" stroke-linecap="round"/>
<line x1="20" y1="-4" x2="24" y2="-4" stroke="currentColor" stroke-width="4" stroke-linecap="round"/>
<line x1="-20" y1="-4" x2="-24" y2="-4" stroke="currentColor" stroke-width="4" stroke-linecap="round"/>"##;
    Seek => "seek", r##"<polygon points="-20,-16 -2,0 -20,16" fill="currentColor"/>
<polygon points="2,-16 20,0 2,16" fill="currentColor"/>"##;
    Temp => "temp", r##"<rect x="-6" y="-32" width="12" height="48" rx="6" fill="none" stroke="currentColor" stroke-width="4"/>
<circle cx="0" cy="22" r="12" fill="none" stroke="currentColor" stroke-width="4"/>
<circle cx="0" cy="22" r="6" fill="currentColor"/>
<line x1="0" y1="16" x2="0" y2="-16" stroke="currentColor" stroke-width="4" stroke-linecap="round"/>"##;
    Tokens => "tokens", r##"<text x="0" y="8" text-anchor="middle" font-family="SF Mono,Menlo,DejaVu Sans Mono,monospace" font-size="40" font-weight="700" fill="currentColor">#</text>"##;
    Bright => "bright", r##"<circle cx="0" cy="0" r="14" fill="none" stroke="currentColor" stroke-width="5"/>
<line x1="0" y1="-24" x2="0" y2="-30" stroke="currentColor" stroke-width="4" stroke-linecap="round"/>
<line x1="0" y1="24" x2="0" y2="30" stroke="currentColor" stroke-width="4" stroke-linecap="round"/>
<line x1="-24" y1="0" x2="-30" y2="0" stroke="currentColor" stroke-width="4" stroke-linecap="round"/>
<line x1="24" y1="0" x2="30" y2="0" stroke="currentColor" stroke-width="4" stroke-linecap="round"/>
<line x1="-17" y1="-17" x2="-21" y2="-21" stroke="currentColor" stroke-width="4" stroke-linecap="round"/>
<line x1="17" y1="-17" x2="21" y2="-21" stroke="currentColor" stroke-width="4" stroke-linecap="round"/>
<line x1="-17" y1="17" x2="-21" y2="21" stroke="currentColor" stroke-width="4" stroke-linecap="round"/>
<line x1="17" y1="17" x2="21" y2="21" stroke="currentColor" stroke-width="4" stroke-linecap="round"/>"##;
    Media => "media", r##"<polygon points="-14,-20 18,0 -14,20" fill="none" stroke="currentColor" stroke-width="5" stroke-linejoin="round"/>
<line x1="26" y1="-20" x2="26" y2="20" stroke="currentColor" stroke-width="5" stroke-linecap="round"/>"##;
}

impl FromStr for Symbol {
    type Err = ProfileError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|symbol| symbol.name() == name)
            .ok_or_else(|| ProfileError::UnknownSymbol {
                name: name.to_string(),
            })
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
