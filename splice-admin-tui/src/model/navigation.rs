//! 路由历史

use splice_admin_core::Route;

/// 路由历史栈，栈顶为当前页面
///
/// 栈永远不为空：最底层是启动时的路由。
#[derive(Debug, Clone)]
pub struct NavigationHistory {
    stack: Vec<Route>,
}

impl NavigationHistory {
    pub fn new(initial: Route) -> Self {
        Self {
            stack: vec![initial],
        }
    }

    /// 当前路由
    pub fn current(&self) -> Route {
        self.stack.last().copied().unwrap_or_default()
    }

    /// 进入新路由；与当前路由相同时不重复入栈
    pub fn push(&mut self, route: Route) {
        if self.current() != route {
            self.stack.push(route);
        }
    }

    /// 是否可以返回
    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    /// 返回上一页，返回新的当前路由
    pub fn pop(&mut self) -> Option<Route> {
        if !self.can_go_back() {
            return None;
        }
        self.stack.pop();
        Some(self.current())
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }
}

impl Default for NavigationHistory {
    fn default() -> Self {
        Self::new(Route::Home)
    }
}
