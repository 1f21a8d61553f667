//! Ad group 表单页面状态

use splice_admin_core::form::{schema, AdgroupDraft, FieldId, FormBindings, ValidationErrors};
use splice_admin_core::types::{Adgroup, Channel, FormMode};

/// 表单页面状态
#[derive(Debug, Clone, Default)]
pub struct AdgroupFormState {
    /// 当前模式（未进入过表单时为 None）
    pub mode: Option<FormMode>,
    /// 类型化的草稿
    pub draft: AdgroupDraft,
    /// 校验绑定与多选控件所绑定的实体
    pub bindings: FormBindings,
    /// 当前焦点字段
    pub focus: FieldId,
    /// 分类多选中的光标位置
    pub category_cursor: usize,
    /// 最近一次提交的字段错误
    pub errors: ValidationErrors,
    /// 滚动偏移（以字段为单位）
    pub scroll: usize,
    /// 编辑模式下等待 ad group 加载
    pub loading: bool,
    /// 加载失败信息
    pub load_error: Option<String>,
}

impl AdgroupFormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 绑定到 `mode` 对应的实体
    ///
    /// 身份变化时重建草稿、清空错误并复位焦点和多选光标，返回 `true`；
    /// 身份相同则什么都不做。
    pub fn reconcile(&mut self, mode: FormMode) -> bool {
        if !self.bindings.reconcile(mode) {
            return false;
        }
        self.mode = Some(mode);
        self.draft = match mode {
            FormMode::Create { campaign_id } => AdgroupDraft::new(campaign_id),
            FormMode::Edit { .. } => AdgroupDraft::default(),
        };
        self.loading = mode.is_edit();
        self.load_error = None;
        self.errors = ValidationErrors::default();
        self.focus = FieldId::Name;
        self.category_cursor = 0;
        self.scroll = 0;
        true
    }

    /// 解除绑定：下次进入表单时重新初始化
    pub fn detach(&mut self) {
        self.bindings.reset();
    }

    /// 用加载到的 ad group 填充草稿
    pub fn fill(&mut self, adgroup: &Adgroup) {
        self.draft = AdgroupDraft::from_adgroup(adgroup);
        self.loading = false;
        self.load_error = None;
    }

    /// 是否在等待 `id` 的数据
    pub fn awaits(&self, id: i64) -> bool {
        self.loading && self.mode == Some(FormMode::Edit { id })
    }

    /// 当前模式和类型下显示的字段
    pub fn visible_fields(&self) -> Vec<FieldId> {
        self.mode
            .map(|mode| schema::visible_fields(mode, self.draft.kind))
            .unwrap_or_default()
    }

    /// 可获得焦点的字段
    pub fn focusable_fields(&self) -> Vec<FieldId> {
        self.mode
            .map(|mode| schema::focusable_fields(mode, self.draft.kind))
            .unwrap_or_default()
    }

    pub fn is_editable(&self, field: FieldId) -> bool {
        self.mode.is_some_and(|mode| schema::is_editable(field, mode))
    }

    /// 焦点移到下一个字段（循环）
    pub fn focus_next(&mut self) {
        self.move_focus(1);
    }

    /// 焦点移到上一个字段（循环）
    pub fn focus_prev(&mut self) {
        self.move_focus(-1);
    }

    fn move_focus(&mut self, delta: isize) {
        let fields = self.focusable_fields();
        if fields.is_empty() {
            return;
        }
        let len = fields.len() as isize;
        let pos = fields.iter().position(|f| *f == self.focus).unwrap_or(0) as isize;
        let next = (pos + delta).rem_euclid(len) as usize;
        self.focus = fields[next];
        self.follow_focus();
    }

    /// 滚动到顶部，焦点落在 `field`（或第一个字段）
    pub fn scroll_to_top(&mut self, field: Option<FieldId>) {
        self.scroll = 0;
        self.focus = field
            .filter(|f| self.focusable_fields().contains(f))
            .unwrap_or(FieldId::Name);
    }

    /// 焦点上移超出视口时跟随滚动；向下由视图按可用高度处理
    fn follow_focus(&mut self) {
        if let Some(pos) = self.visible_fields().iter().position(|f| *f == self.focus) {
            if pos < self.scroll {
                self.scroll = pos;
            }
        }
    }

    /// 分类选项：参考数据与草稿中已有值的并集（已排序）
    pub fn category_options(&self, reference: &[String]) -> Vec<String> {
        let mut options: Vec<String> = reference.to_vec();
        for category in &self.draft.categories {
            if !options.contains(category) {
                options.push(category.clone());
            }
        }
        options.sort();
        options
    }

    /// 移动分类光标
    pub fn move_category_cursor(&mut self, delta: isize, option_count: usize) {
        if option_count == 0 {
            self.category_cursor = 0;
            return;
        }
        let len = option_count as isize;
        let pos = self.category_cursor.min(option_count - 1) as isize;
        self.category_cursor = (pos + delta).rem_euclid(len) as usize;
    }

    /// 相对当前渠道循环选择，返回新的渠道 id
    pub fn cycle_channel(&self, channels: &[Channel], delta: isize) -> Option<i64> {
        let ids: Vec<i64> = channels.iter().map(|c| c.id).collect();
        cycle(&ids, self.draft.channel_id.as_ref(), delta)
    }

    /// 相对当前语言区域循环选择
    pub fn cycle_locale(&self, locales: &[String], delta: isize) -> Option<String> {
        cycle(locales, self.draft.locale.as_ref(), delta)
    }
}

/// 在选项中循环；当前值不在选项中时从头（或尾）开始
fn cycle<T: Clone + PartialEq>(options: &[T], current: Option<&T>, delta: isize) -> Option<T> {
    if options.is_empty() {
        return None;
    }
    let len = options.len() as isize;
    let next = match current.and_then(|c| options.iter().position(|o| o == c)) {
        Some(pos) => (pos as isize + delta).rem_euclid(len),
        None if delta < 0 => len - 1,
        None => 0,
    };
    options.get(next as usize).cloned()
}
