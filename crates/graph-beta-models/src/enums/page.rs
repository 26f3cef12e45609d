//! SharePoint page layout enums.

use std::fmt;
use std::str::FromStr;

use graph_beta_abstractions::{unknown_enum_value, EnumValue, SerializationError};

// ── PageLayoutType ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageLayoutType {
    MicrosoftReserved,
    Article,
    Home,
    UnknownFutureValue,
}

impl PageLayoutType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageLayoutType::MicrosoftReserved => "microsoftReserved",
            PageLayoutType::Article => "article",
            PageLayoutType::Home => "home",
            PageLayoutType::UnknownFutureValue => "unknownFutureValue",
        }
    }

    pub fn parse_str(s: &str) -> Result<Self, SerializationError> {
        match s {
            "microsoftReserved" => Ok(PageLayoutType::MicrosoftReserved),
            "article" => Ok(PageLayoutType::Article),
            "home" => Ok(PageLayoutType::Home),
            "unknownFutureValue" => Ok(PageLayoutType::UnknownFutureValue),
            other => Err(unknown_enum_value::<Self>(other)),
        }
    }
}

impl EnumValue for PageLayoutType {
    const TYPE_NAME: &'static str = "PageLayoutType";
    const VALUES: &'static [Self] = &[
        PageLayoutType::MicrosoftReserved,
        PageLayoutType::Article,
        PageLayoutType::Home,
        PageLayoutType::UnknownFutureValue,
    ];

    fn as_str(&self) -> &'static str {
        PageLayoutType::as_str(self)
    }

    fn parse_str(s: &str) -> Result<Self, SerializationError> {
        PageLayoutType::parse_str(s)
    }
}

impl FromStr for PageLayoutType {
    type Err = SerializationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageLayoutType::parse_str(s)
    }
}

impl fmt::Display for PageLayoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── PagePromotionType ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PagePromotionType {
    MicrosoftReserved,
    Page,
    NewsPost,
    UnknownFutureValue,
}

impl PagePromotionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PagePromotionType::MicrosoftReserved => "microsoftReserved",
            PagePromotionType::Page => "page",
            PagePromotionType::NewsPost => "newsPost",
            PagePromotionType::UnknownFutureValue => "unknownFutureValue",
        }
    }

    pub fn parse_str(s: &str) -> Result<Self, SerializationError> {
        match s {
            "microsoftReserved" => Ok(PagePromotionType::MicrosoftReserved),
            "page" => Ok(PagePromotionType::Page),
            "newsPost" => Ok(PagePromotionType::NewsPost),
            "unknownFutureValue" => Ok(PagePromotionType::UnknownFutureValue),
            other => Err(unknown_enum_value::<Self>(other)),
        }
    }
}

impl EnumValue for PagePromotionType {
    const TYPE_NAME: &'static str = "PagePromotionType";
    const VALUES: &'static [Self] = &[
        PagePromotionType::MicrosoftReserved,
        PagePromotionType::Page,
        PagePromotionType::NewsPost,
        PagePromotionType::UnknownFutureValue,
    ];

    fn as_str(&self) -> &'static str {
        PagePromotionType::as_str(self)
    }

    fn parse_str(s: &str) -> Result<Self, SerializationError> {
        PagePromotionType::parse_str(s)
    }
}

impl FromStr for PagePromotionType {
    type Err = SerializationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PagePromotionType::parse_str(s)
    }
}

impl fmt::Display for PagePromotionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── TitleAreaLayoutType ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TitleAreaLayoutType {
    ImageAndTitle,
    Plain,
    ColorBlock,
    Overlap,
    UnknownFutureValue,
}

impl TitleAreaLayoutType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TitleAreaLayoutType::ImageAndTitle => "imageAndTitle",
            TitleAreaLayoutType::Plain => "plain",
            TitleAreaLayoutType::ColorBlock => "colorBlock",
            TitleAreaLayoutType::Overlap => "overlap",
            TitleAreaLayoutType::UnknownFutureValue => "unknownFutureValue",
        }
    }

    pub fn parse_str(s: &str) -> Result<Self, SerializationError> {
        match s {
            "imageAndTitle" => Ok(TitleAreaLayoutType::ImageAndTitle),
            "plain" => Ok(TitleAreaLayoutType::Plain),
            "colorBlock" => Ok(TitleAreaLayoutType::ColorBlock),
            "overlap" => Ok(TitleAreaLayoutType::Overlap),
            "unknownFutureValue" => Ok(TitleAreaLayoutType::UnknownFutureValue),
            other => Err(unknown_enum_value::<Self>(other)),
        }
    }
}

impl EnumValue for TitleAreaLayoutType {
    const TYPE_NAME: &'static str = "TitleAreaLayoutType";
    const VALUES: &'static [Self] = &[
        TitleAreaLayoutType::ImageAndTitle,
        TitleAreaLayoutType::Plain,
        TitleAreaLayoutType::ColorBlock,
        TitleAreaLayoutType::Overlap,
        TitleAreaLayoutType::UnknownFutureValue,
    ];

    fn as_str(&self) -> &'static str {
        TitleAreaLayoutType::as_str(self)
    }

    fn parse_str(s: &str) -> Result<Self, SerializationError> {
        TitleAreaLayoutType::parse_str(s)
    }
}

impl FromStr for TitleAreaLayoutType {
    type Err = SerializationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TitleAreaLayoutType::parse_str(s)
    }
}

impl fmt::Display for TitleAreaLayoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── TitleAreaTextAlignmentType ────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TitleAreaTextAlignmentType {
    Left,
    Center,
    UnknownFutureValue,
}

impl TitleAreaTextAlignmentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TitleAreaTextAlignmentType::Left => "left",
            TitleAreaTextAlignmentType::Center => "center",
            TitleAreaTextAlignmentType::UnknownFutureValue => "unknownFutureValue",
        }
    }

    pub fn parse_str(s: &str) -> Result<Self, SerializationError> {
        match s {
            "left" => Ok(TitleAreaTextAlignmentType::Left),
            "center" => Ok(TitleAreaTextAlignmentType::Center),
            "unknownFutureValue" => Ok(TitleAreaTextAlignmentType::UnknownFutureValue),
            other => Err(unknown_enum_value::<Self>(other)),
        }
    }
}

impl EnumValue for TitleAreaTextAlignmentType {
    const TYPE_NAME: &'static str = "TitleAreaTextAlignmentType";
    const VALUES: &'static [Self] = &[
        TitleAreaTextAlignmentType::Left,
        TitleAreaTextAlignmentType::Center,
        TitleAreaTextAlignmentType::UnknownFutureValue,
    ];

    fn as_str(&self) -> &'static str {
        TitleAreaTextAlignmentType::as_str(self)
    }

    fn parse_str(s: &str) -> Result<Self, SerializationError> {
        TitleAreaTextAlignmentType::parse_str(s)
    }
}

impl FromStr for TitleAreaTextAlignmentType {
    type Err = SerializationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TitleAreaTextAlignmentType::parse_str(s)
    }
}

impl fmt::Display for TitleAreaTextAlignmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── SectionEmphasisType ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionEmphasisType {
    None,
    Neutral,
    Soft,
    Strong,
    UnknownFutureValue,
}

impl SectionEmphasisType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionEmphasisType::None => "none",
            SectionEmphasisType::Neutral => "neutral",
            SectionEmphasisType::Soft => "soft",
            SectionEmphasisType::Strong => "strong",
            SectionEmphasisType::UnknownFutureValue => "unknownFutureValue",
        }
    }

    pub fn parse_str(s: &str) -> Result<Self, SerializationError> {
        match s {
            "none" => Ok(SectionEmphasisType::None),
            "neutral" => Ok(SectionEmphasisType::Neutral),
            "soft" => Ok(SectionEmphasisType::Soft),
            "strong" => Ok(SectionEmphasisType::Strong),
            "unknownFutureValue" => Ok(SectionEmphasisType::UnknownFutureValue),
            other => Err(unknown_enum_value::<Self>(other)),
        }
    }
}

impl EnumValue for SectionEmphasisType {
    const TYPE_NAME: &'static str = "SectionEmphasisType";
    const VALUES: &'static [Self] = &[
        SectionEmphasisType::None,
        SectionEmphasisType::Neutral,
        SectionEmphasisType::Soft,
        SectionEmphasisType::Strong,
        SectionEmphasisType::UnknownFutureValue,
    ];

    fn as_str(&self) -> &'static str {
        SectionEmphasisType::as_str(self)
    }

    fn parse_str(s: &str) -> Result<Self, SerializationError> {
        SectionEmphasisType::parse_str(s)
    }
}

impl FromStr for SectionEmphasisType {
    type Err = SerializationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionEmphasisType::parse_str(s)
    }
}

impl fmt::Display for SectionEmphasisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── HorizontalSectionLayoutType ───────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorizontalSectionLayoutType {
    None,
    OneColumn,
    TwoColumns,
    ThreeColumns,
    OneThirdLeftColumn,
    OneThirdRightColumn,
    FullWidth,
    UnknownFutureValue,
}

impl HorizontalSectionLayoutType {
    pub fn as_str(&self) -> &'static str {
        match self {
            HorizontalSectionLayoutType::None => "none",
            HorizontalSectionLayoutType::OneColumn => "oneColumn",
            HorizontalSectionLayoutType::TwoColumns => "twoColumns",
            HorizontalSectionLayoutType::ThreeColumns => "threeColumns",
            HorizontalSectionLayoutType::OneThirdLeftColumn => "oneThirdLeftColumn",
            HorizontalSectionLayoutType::OneThirdRightColumn => "oneThirdRightColumn",
            HorizontalSectionLayoutType::FullWidth => "fullWidth",
            HorizontalSectionLayoutType::UnknownFutureValue => "unknownFutureValue",
        }
    }

    pub fn parse_str(s: &str) -> Result<Self, SerializationError> {
        match s {
            "none" => Ok(HorizontalSectionLayoutType::None),
            "oneColumn" => Ok(HorizontalSectionLayoutType::OneColumn),
            "twoColumns" => Ok(HorizontalSectionLayoutType::TwoColumns),
            "threeColumns" => Ok(HorizontalSectionLayoutType::ThreeColumns),
            "oneThirdLeftColumn" => Ok(HorizontalSectionLayoutType::OneThirdLeftColumn),
            "oneThirdRightColumn" => Ok(HorizontalSectionLayoutType::OneThirdRightColumn),
            "fullWidth" => Ok(HorizontalSectionLayoutType::FullWidth),
            "unknownFutureValue" => Ok(HorizontalSectionLayoutType::UnknownFutureValue),
            other => Err(unknown_enum_value::<Self>(other)),
        }
    }
}

impl EnumValue for HorizontalSectionLayoutType {
    const TYPE_NAME: &'static str = "HorizontalSectionLayoutType";
    const VALUES: &'static [Self] = &[
        HorizontalSectionLayoutType::None,
        HorizontalSectionLayoutType::OneColumn,
        HorizontalSectionLayoutType::TwoColumns,
        HorizontalSectionLayoutType::ThreeColumns,
        HorizontalSectionLayoutType::OneThirdLeftColumn,
        HorizontalSectionLayoutType::OneThirdRightColumn,
        HorizontalSectionLayoutType::FullWidth,
        HorizontalSectionLayoutType::UnknownFutureValue,
    ];

    fn as_str(&self) -> &'static str {
        HorizontalSectionLayoutType::as_str(self)
    }

    fn parse_str(s: &str) -> Result<Self, SerializationError> {
        HorizontalSectionLayoutType::parse_str(s)
    }
}

impl FromStr for HorizontalSectionLayoutType {
    type Err = SerializationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HorizontalSectionLayoutType::parse_str(s)
    }
}

impl fmt::Display for HorizontalSectionLayoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
