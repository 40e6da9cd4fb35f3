// ==========================================
// 软包装报价系统 - 成本说明生成
// ==========================================
// 职责: 每个成本分项一条说明 + 一条汇总说明
// 红线: 只读成本明细,不参与任何数值计算
// 显示精度: 面积/金额 2 位,转数 1 位,单价 4 位
// ==========================================

use crate::domain::breakdown::{
    AccessoryItem, CostBreakdown, CostComponent, Explanation, SpecialItem,
};
use crate::domain::quote::QuoteInput;
use crate::domain::types::{BagType, PricingMode};
use crate::engine::cost::{rule_for, FormingFormula};
use crate::engine::cost::accessory::{
    HANDLE_UNIT_PRICE, SPOUT_UNIT_PRICE, TEAR_ZIPPER_RATE, VALVE_UNIT_PRICE, ZIPPER_RATE,
};
use crate::engine::cost::special::{
    shaped_tooling_mold_fee, SHAPED_TOOLING_RATE, SPOT_UV_FEE, SPOT_UV_RATE, STRIPED_WINDOW_FEE,
    STRIPED_WINDOW_RATE,
};
use crate::i18n::{t, t_with_args};

/// 汇总价格（供汇总说明使用）
#[derive(Debug, Clone, Copy)]
pub struct PriceSummary {
    pub unit_price: f64,
    pub unit_price_cny: f64,
    pub total_price_cny: f64,
    pub sku_multiplied: bool,
}

pub fn money(v: f64) -> String {
    format!("{:.2}", v)
}

pub fn revs(v: f64) -> String {
    format!("{:.1}", v)
}

pub fn unit_price(v: f64) -> String {
    format!("{:.4}", v)
}

/// 最多保留 `digits` 位小数并去掉末尾 0
fn trimmed(v: f64, digits: usize) -> String {
    let s = format!("{:.*}", digits, v);
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

// ==========================================
// ExplanationBuilder - 说明生成器
// ==========================================
pub struct ExplanationBuilder<'a> {
    locale: &'a str,
}

impl<'a> ExplanationBuilder<'a> {
    pub fn new(locale: &'a str) -> Self {
        Self { locale }
    }

    /// 生成全部说明（顺序固定: 材料/印刷/制袋/配件/特殊工艺/汇总）
    pub fn build(
        &self,
        input: &QuoteInput,
        breakdown: &CostBreakdown,
        prices: &PriceSummary,
    ) -> Vec<Explanation> {
        vec![
            self.material(input, breakdown),
            self.print(breakdown),
            self.bag_forming(breakdown),
            self.accessories(input, breakdown),
            self.special(input, breakdown),
            self.summary(input, breakdown, prices),
        ]
    }

    fn bag_name(&self, bag_type: BagType) -> &'static str {
        if self.locale == "zh-CN" {
            bag_type.title_cn()
        } else {
            bag_type.as_str()
        }
    }

    fn tr(&self, key: &str, args: &[(&str, &str)]) -> String {
        t_with_args(self.locale, key, args)
    }

    fn entry(
        &self,
        component: CostComponent,
        title_key: &str,
        desc: Option<String>,
        formula: String,
        substitution: Vec<String>,
        result: f64,
    ) -> Explanation {
        let title = t(self.locale, title_key);
        let substitution = substitution.join("\n");

        let mut lines = Vec::new();
        if let Some(desc) = desc {
            lines.push(desc);
        }
        lines.push(format!("{}{}", t(self.locale, "label.formula"), formula));
        lines.push(t(self.locale, "label.substitution"));
        lines.push(substitution.clone());

        Explanation {
            component,
            title,
            formula,
            substitution,
            result,
            text: lines.join("\n"),
        }
    }

    // ===== 材料 =====
    fn material(&self, input: &QuoteInput, b: &CostBreakdown) -> Explanation {
        let m = &b.material;
        let run = &b.run;
        let feed = [
            ("m_order", money(run.order_m)),
            ("m_loss", money(run.loss_m)),
            ("m_idle", money(run.idle_m)),
            ("m_total", money(run.total_m)),
        ];
        let feed_args: Vec<(&str, &str)> = feed.iter().map(|(k, v)| (*k, v.as_str())).collect();

        let area = money(m.area_sqm);
        let price = m.unit_price.to_string();
        let cost = money(m.cost);

        let (desc_key, formula_key, subst) = match m.mode {
            PricingMode::PerKg => {
                let thickness = (input.material.thickness_um / 1_000_000.0).to_string();
                let density = input.material.density.to_string();
                (
                    "explain.material.per_kg_desc",
                    "explain.material.per_kg_formula",
                    self.tr(
                        "explain.material.per_kg_subst",
                        &[
                            ("area", &area),
                            ("thickness", &thickness),
                            ("density", &density),
                            ("price", &price),
                            ("cost", &cost),
                        ],
                    ),
                )
            }
            PricingMode::PerArea => (
                "explain.material.per_area_desc",
                "explain.material.per_area_formula",
                self.tr(
                    "explain.material.per_area_subst",
                    &[("area", &area), ("price", &price), ("cost", &cost)],
                ),
            ),
        };

        self.entry(
            CostComponent::Material,
            "explain.material.title",
            Some(self.tr(desc_key, &feed_args)),
            t(self.locale, formula_key),
            vec![subst],
            m.cost,
        )
    }

    // ===== 印刷 =====
    fn print(&self, b: &CostBreakdown) -> Explanation {
        let p = &b.print;
        let waste = p.waste_price.to_string();
        let subst = self.tr(
            "explain.print.subst",
            &[
                ("r_order", &revs(b.run.order_revs)),
                ("tier", &p.tier_price.to_string()),
                ("r_loss", &revs(b.run.loss_revs)),
                ("waste", &waste),
                ("cost", &money(p.cost)),
            ],
        );

        self.entry(
            CostComponent::Print,
            "explain.print.title",
            Some(t(self.locale, "explain.print.desc")),
            self.tr("explain.print.formula", &[("waste", &waste)]),
            vec![subst],
            p.cost,
        )
    }

    // ===== 制袋 =====
    fn bag_forming(&self, b: &CostBreakdown) -> Explanation {
        let bag = &b.bag_forming;
        let rule = rule_for(bag.bag_type);

        let r_order = revs(b.run.order_revs);
        let r_loss = revs(b.run.loss_revs);
        let n_row = b.layout.units_along.to_string();
        let raw = money(bag.raw_cost);

        let (formula, subst) = match rule.formula {
            FormingFormula::PerRevLength {
                coefficient,
                multiplier,
            } => {
                let coef = coefficient.to_string();
                let mult = multiplier.to_string();
                let l_rev = trimmed(b.run.rev_length_m, 4);
                let (formula_key, subst_key) = if multiplier == 1.0 {
                    ("explain.bag.formula_rev_length", "explain.bag.subst_rev_length")
                } else {
                    (
                        "explain.bag.formula_rev_length_bonus",
                        "explain.bag.subst_rev_length_bonus",
                    )
                };
                (
                    self.tr(formula_key, &[("coef", &coef), ("mult", &mult)]),
                    self.tr(
                        subst_key,
                        &[
                            ("coef", &coef),
                            ("l_rev", &l_rev),
                            ("r_order", &r_order),
                            ("r_loss", &r_loss),
                            ("n_row", &n_row),
                            ("mult", &mult),
                            ("raw", &raw),
                        ],
                    ),
                )
            }
            FormingFormula::PerUnits { coefficient } => {
                let coef = coefficient.to_string();
                (
                    self.tr("explain.bag.formula_units", &[("coef", &coef)]),
                    self.tr(
                        "explain.bag.subst_units",
                        &[
                            ("coef", &coef),
                            ("n_rev", &b.layout.units_per_rev.to_string()),
                            ("r_order", &r_order),
                            ("r_loss", &r_loss),
                            ("n_row", &n_row),
                            ("raw", &raw),
                        ],
                    ),
                )
            }
            FormingFormula::OrderMeters => (
                t(self.locale, "explain.bag.formula_order_m"),
                self.tr(
                    "explain.bag.subst_order_m",
                    &[("m_order", &money(b.run.order_m)), ("raw", &raw)],
                ),
            ),
        };

        let mut lines = vec![subst];
        if let Some(floor) = bag.floor {
            let floor = trimmed(floor, 2);
            let key = if bag.floor_applied {
                "explain.bag.floor_hit"
            } else {
                "explain.bag.floor_ok"
            };
            lines.push(self.tr(key, &[("floor", &floor), ("cost", &money(bag.cost))]));
        }

        self.entry(
            CostComponent::BagForming,
            "explain.bag.title",
            Some(self.tr("explain.bag.desc", &[("bag_type", self.bag_name(bag.bag_type))])),
            formula,
            lines,
            bag.cost,
        )
    }

    // ===== 配件 =====
    fn accessories(&self, input: &QuoteInput, b: &CostBreakdown) -> Explanation {
        let acc = &b.accessories;
        let q = input.quantity.to_string();
        let zip = money(acc.zip_length);

        let mut lines = Vec::new();
        if acc.items.is_empty() {
            lines.push(t(self.locale, "explain.accessory.none"));
        } else {
            let uses_zip = acc
                .items
                .iter()
                .any(|(item, _)| matches!(item, AccessoryItem::Zipper | AccessoryItem::TearZipper));
            if uses_zip {
                lines.push(self.tr(
                    "explain.accessory.zip_length",
                    &[
                        ("w", &input.width_mm.to_string()),
                        ("n_rev", &b.layout.units_per_rev.to_string()),
                        ("r_order", &revs(b.run.order_revs)),
                        ("r_loss", &revs(b.run.loss_revs)),
                        ("zip", &zip),
                    ],
                ));
            }

            for (item, cost) in &acc.items {
                let cost = money(*cost);
                let line = match item {
                    AccessoryItem::Zipper => self.tr(
                        "explain.accessory.zipper",
                        &[("zip", &zip), ("rate", &ZIPPER_RATE.to_string()), ("cost", &cost)],
                    ),
                    AccessoryItem::TearZipper => self.tr(
                        "explain.accessory.tear_zipper",
                        &[("zip", &zip), ("rate", &TEAR_ZIPPER_RATE.to_string()), ("cost", &cost)],
                    ),
                    AccessoryItem::Valve => self.tr(
                        "explain.accessory.valve",
                        &[("q", &q), ("price", &VALVE_UNIT_PRICE.to_string()), ("cost", &cost)],
                    ),
                    AccessoryItem::Spout => self.tr(
                        "explain.accessory.spout",
                        &[("q", &q), ("price", &SPOUT_UNIT_PRICE.to_string()), ("cost", &cost)],
                    ),
                    AccessoryItem::Handle => self.tr(
                        "explain.accessory.handle",
                        &[("q", &q), ("price", &HANDLE_UNIT_PRICE.to_string()), ("cost", &cost)],
                    ),
                    AccessoryItem::TinTie(band) => self.tr(
                        "explain.accessory.tin_tie",
                        &[
                            ("band", band.label()),
                            ("q", &q),
                            ("price", &band.unit_price().to_string()),
                            ("cost", &cost),
                        ],
                    ),
                };
                lines.push(line);
            }
        }
        lines.push(self.tr("explain.accessory.total", &[("cost", &money(acc.cost))]));

        self.entry(
            CostComponent::Accessories,
            "explain.accessory.title",
            Some(t(self.locale, "explain.accessory.desc")),
            t(self.locale, "explain.accessory.formula"),
            lines,
            acc.cost,
        )
    }

    // ===== 特殊工艺 =====
    fn special(&self, input: &QuoteInput, b: &CostBreakdown) -> Explanation {
        let sp = &b.special;
        let q = input.quantity.to_string();

        let mut lines = Vec::new();
        if sp.items.is_empty() {
            lines.push(t(self.locale, "explain.special.none"));
        }
        for (item, cost) in &sp.items {
            let cost = money(*cost);
            let line = match item {
                SpecialItem::StripedWindow => self.tr(
                    "explain.special.striped_window",
                    &[
                        ("q", &q),
                        ("rate", &STRIPED_WINDOW_RATE.to_string()),
                        ("fee", &STRIPED_WINDOW_FEE.to_string()),
                        ("cost", &cost),
                    ],
                ),
                SpecialItem::SpotUv => self.tr(
                    "explain.special.spot_uv",
                    &[
                        ("q", &q),
                        ("rate", &SPOT_UV_RATE.to_string()),
                        ("fee", &SPOT_UV_FEE.to_string()),
                        ("cost", &cost),
                    ],
                ),
                SpecialItem::ShapedTooling => self.tr(
                    "explain.special.shaped_tooling",
                    &[
                        ("q", &q),
                        ("rate", &SHAPED_TOOLING_RATE.to_string()),
                        ("mold", &shaped_tooling_mold_fee(input.quantity).to_string()),
                        ("cost", &cost),
                    ],
                ),
            };
            lines.push(line);
        }
        if sp.high_mold_cost {
            lines.push(t(self.locale, "explain.special.high_mold_cost"));
        }
        lines.push(self.tr("explain.special.total", &[("cost", &money(sp.cost))]));

        self.entry(
            CostComponent::Special,
            "explain.special.title",
            Some(t(self.locale, "explain.special.desc")),
            t(self.locale, "explain.special.formula"),
            lines,
            sp.cost,
        )
    }

    // ===== 汇总 =====
    fn summary(&self, input: &QuoteInput, b: &CostBreakdown, prices: &PriceSummary) -> Explanation {
        let q = input.quantity.to_string();
        let total = money(b.total);
        let unit = unit_price(prices.unit_price);
        let unit_tax = unit_price(prices.unit_price_cny);
        let total_tax = money(prices.total_price_cny);

        let mut lines = vec![
            self.tr(
                "explain.summary.total",
                &[
                    ("material", &money(b.material.cost)),
                    ("print", &money(b.print.cost)),
                    ("bag", &money(b.bag_forming.cost)),
                    ("accessory", &money(b.accessories.cost)),
                    ("special", &money(b.special.cost)),
                    ("total", &total),
                ],
            ),
            self.tr(
                "explain.summary.unit",
                &[("total", &total), ("q", &q), ("unit", &unit)],
            ),
            self.tr(
                "explain.summary.unit_tax",
                &[
                    ("tax_pct", &trimmed(input.tax_rate * 100.0, 2)),
                    ("unit", &unit),
                    ("tax", &input.tax_rate.to_string()),
                    ("unit_tax", &unit_tax),
                ],
            ),
        ];

        if prices.sku_multiplied {
            lines.push(self.tr(
                "explain.summary.total_tax_sku",
                &[
                    ("unit_tax", &unit_tax),
                    ("q", &q),
                    ("sku", &input.sku_count.to_string()),
                    ("total_tax", &total_tax),
                ],
            ));
        } else {
            lines.push(self.tr(
                "explain.summary.total_tax",
                &[("unit_tax", &unit_tax), ("q", &q), ("total_tax", &total_tax)],
            ));
        }

        self.entry(
            CostComponent::Summary,
            "explain.summary.title",
            None,
            t(self.locale, "explain.summary.formula"),
            lines,
            prices.total_price_cny,
        )
    }
}
