/// Page script behind every code container's Copy button.
pub const COPY_SCRIPT: &str = r#"<script>
  function copyToClipboard(button) {
    const codeBlock = button.parentElement.querySelector('code');
    navigator.clipboard.writeText(codeBlock.innerText).then(() => {
      button.innerText = 'Copied!';
      setTimeout(() => button.innerText = 'Copy', 2000);
    });
  }
</script>
"#;
