pub trait ConfigProvider: Send + Sync {
    /// 訂單未指定 shipper_account 時使用的預設帳號
    fn account_number(&self) -> &str;
    /// DDP 的 duties-taxes 帳號；未設定時沿用 shipper 帳號
    fn duties_account_number(&self) -> Option<&str>;
}

pub trait InvoiceNumberSource: Send + Sync {
    /// 回傳的編號必須包含 `INV-`
    fn next_invoice_number(&self) -> String;
}
