//! 按显示宽度处理文本（CJK 字符占两列）

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 右侧补空格到 `width` 列
pub fn pad_right(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(padding))
}

/// 只保留能放进 `width` 列的末尾部分（输入框里光标总在末尾）
pub fn tail(text: &str, width: usize) -> &str {
    if text.width() <= width {
        return text;
    }
    let mut used = 0;
    let mut start = text.len();
    for (i, ch) in text.char_indices().rev() {
        used += ch.width().unwrap_or(0);
        if used > width {
            break;
        }
        start = i;
    }
    &text[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_by_display_width() {
        assert_eq!(pad_right("ab", 4), "ab  ");
        assert_eq!(pad_right("广告", 6), "广告  ");
        assert_eq!(pad_right("toolong", 3), "toolong");
    }

    #[test]
    fn tail_keeps_the_end() {
        assert_eq!(tail("short", 10), "short");
        assert_eq!(tail("abcdef", 3), "def");
        assert_eq!(tail("广告组", 4), "告组");
        assert_eq!(tail("广告组", 3), "组");
        assert_eq!(tail("abc", 0), "");
    }
}
