//! 表单消息

/// Ad group 表单消息
#[derive(Debug, Clone)]
pub enum FormMessage {
    /// 下一个字段
    NextField,
    /// 上一个字段
    PrevField,
    /// 输入字符（文本字段）
    Input(char),
    /// 删除字符
    Backspace,
    /// 选择器上一项 / 分类光标左移
    PrevOption,
    /// 选择器下一项 / 分类光标右移
    NextOption,
    /// 切换布尔值、类型或光标下的分类
    Toggle,
    /// 提交表单
    Submit,
}
