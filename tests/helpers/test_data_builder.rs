// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use pouch_quote::domain::quote::{Accessories, MaterialSpec, QuoteInput, SpecialProcess};
use pouch_quote::domain::types::{BagType, TinTieBand};

// ==========================================
// QuoteInput 构建器
// ==========================================
// 缺省值即基准场景: 三边封 100×150, 封边 10, PE 100μm / 密度 1.0 / 10 元/kg,
// 数量 1000, 单款, 税率 13%
pub struct QuoteInputBuilder {
    input: QuoteInput,
}

impl QuoteInputBuilder {
    pub fn new() -> Self {
        Self {
            input: QuoteInput {
                bag_type: BagType::ThreeSideSeal,
                width_mm: 100.0,
                height_mm: 150.0,
                gusset_mm: 0.0,
                seal_back_mm: 10.0,
                side_expand_mm: 0.0,
                material: MaterialSpec::per_kg("PE-100μm", 100.0, 1.0, 10.0),
                quantity: 1000,
                sku_count: 1,
                tax_rate: 0.13,
                accessories: Accessories::default(),
                special: SpecialProcess::default(),
            },
        }
    }

    pub fn bag_type(mut self, bag_type: BagType) -> Self {
        self.input.bag_type = bag_type;
        self
    }

    pub fn size(mut self, width_mm: f64, height_mm: f64) -> Self {
        self.input.width_mm = width_mm;
        self.input.height_mm = height_mm;
        self
    }

    pub fn gusset(mut self, gusset_mm: f64) -> Self {
        self.input.gusset_mm = gusset_mm;
        self
    }

    pub fn seal_back(mut self, seal_back_mm: f64) -> Self {
        self.input.seal_back_mm = seal_back_mm;
        self
    }

    pub fn side_expand(mut self, side_expand_mm: f64) -> Self {
        self.input.side_expand_mm = side_expand_mm;
        self
    }

    pub fn quantity(mut self, quantity: u64) -> Self {
        self.input.quantity = quantity;
        self
    }

    pub fn sku(mut self, sku_count: u32) -> Self {
        self.input.sku_count = sku_count;
        self
    }

    pub fn tax(mut self, tax_rate: f64) -> Self {
        self.input.tax_rate = tax_rate;
        self
    }

    pub fn material(mut self, material: MaterialSpec) -> Self {
        self.input.material = material;
        self
    }

    pub fn per_area(mut self, price_per_sqm: f64) -> Self {
        let m = self.input.material.clone();
        self.input.material = MaterialSpec::per_area(&m.name, m.thickness_um, m.density, price_per_sqm);
        self
    }

    pub fn zipper(mut self) -> Self {
        self.input.accessories.zipper = true;
        self
    }

    pub fn tear_zipper(mut self) -> Self {
        self.input.accessories.tear_zipper = true;
        self
    }

    pub fn valve(mut self) -> Self {
        self.input.accessories.valve = true;
        self
    }

    pub fn tin_tie(mut self, band: TinTieBand) -> Self {
        self.input.accessories.tin_tie = Some(band);
        self
    }

    pub fn shaped_tooling(mut self) -> Self {
        self.input.special.shaped_tooling = true;
        self
    }

    pub fn spot_uv(mut self) -> Self {
        self.input.special.spot_uv = true;
        self
    }

    pub fn high_mold_cost(mut self) -> Self {
        self.input.special.high_mold_cost = true;
        self
    }

    pub fn build(self) -> QuoteInput {
        self.input
    }
}

/// 基准场景输入
pub fn scenario() -> QuoteInput {
    QuoteInputBuilder::new().build()
}
